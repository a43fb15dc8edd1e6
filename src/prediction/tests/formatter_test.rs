#[cfg(test)]
mod formatter_test {
    use crate::config::Config;
    use crate::image_classifier::interface::Classification;
    use crate::prediction::formatter::PredictionFormatter;
    use crate::prediction::model::Prediction;

    fn predictions() -> Vec<Prediction> {
        vec![
            Prediction::new("red fox, Vulpes vulpes", 0.6).unwrap(),
            Prediction::new("timber wolf, grey wolf", 0.3).unwrap(),
            Prediction::new("Chihuahua", 0.1).unwrap(),
        ]
    }

    #[test]
    fn test_default_shows_two_lines() {
        let formatter = PredictionFormatter::new(&Config::default());

        assert_eq!(formatter.limit(), 2);
        assert_eq!(
            formatter.format_message(&predictions()),
            "red fox - 60.0%\ntimber wolf - 30.0%"
        );
    }

    #[test]
    fn test_empty_list_shows_no_predictions() {
        let formatter = PredictionFormatter::new(&Config::default());

        assert_eq!(formatter.format_message(&[]), "No predictions");
    }

    #[test]
    fn test_limit_and_separator_come_from_config() {
        let config = Config {
            predictions_to_show: 3,
            prediction_separator: " | ".to_string(),
            ..Config::default()
        };
        let formatter = PredictionFormatter::new(&config);

        assert_eq!(
            formatter.format_message(&predictions()),
            "red fox - 60.0% | timber wolf - 30.0% | Chihuahua - 10.0%"
        );
    }

    #[test]
    fn test_from_classification() {
        let prediction = Prediction::try_from(Classification {
            label: "daisy".to_string(),
            confidence: 0.25,
        })
        .unwrap();

        assert_eq!(prediction.classification(), "daisy");
        assert_eq!(prediction.confidence(), 0.25);
    }
}
