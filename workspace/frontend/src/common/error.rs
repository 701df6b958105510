use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline alert shown above the chart; the chart itself stays on screen.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    let retry = props.on_retry.as_ref().map(|on_retry| {
        let on_retry = on_retry.clone();
        html! {
            <button
                type="button"
                class="btn btn-sm"
                onclick={Callback::from(move |_| {
                    log::debug!("User clicked retry button");
                    on_retry.emit(());
                })}
            >
                {"Try Again"}
            </button>
        }
    });

    html! {
        <div role="alert" class="alert alert-error my-4">
            <span>{&props.message}</span>
            {retry.unwrap_or_default()}
        </div>
    }
}
