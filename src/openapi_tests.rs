#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        assert!(components.schemas.contains_key("ForecastRequest"));
        assert!(components.schemas.contains_key("ForecastResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_forecast_request_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let request_schema = components.schemas.get("ForecastRequest").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = request_schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("historical_temps"));
            assert!(properties.contains_key("prediction_length"));
        } else {
            panic!("ForecastRequest should be an object schema");
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let health_response_schema = components.schemas.get("HealthResponse").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = health_response_schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("status"));
            assert!(properties.contains_key("version"));
            assert!(properties.contains_key("model"));
        } else {
            panic!("HealthResponse should be an object schema");
        }
    }

    #[test]
    fn test_predict_path_is_documented() {
        let openapi = ApiDoc::openapi();
        assert!(openapi.paths.paths.contains_key("/predict"));
        assert!(openapi.paths.paths.contains_key("/health"));
    }
}
