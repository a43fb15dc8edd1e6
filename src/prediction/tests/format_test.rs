#[cfg(test)]
mod format_test {
    use crate::prediction::format::{
        clean_label, format_confidence, format_prediction_line, format_top_predictions,
    };
    use crate::prediction::model::{Prediction, PredictionError};
    use crate::prediction::rank::rank_predictions;

    fn prediction(classification: &str, confidence: f32) -> Prediction {
        Prediction::new(classification, confidence).unwrap()
    }

    fn decimals(formatted: &str) -> usize {
        formatted.split('.').nth(1).map(str::len).unwrap_or(0)
    }

    #[test]
    fn test_confidence_table() {
        assert_eq!(format_confidence(1.0), "100%");
        assert_eq!(format_confidence(0.234), "23.4");
        assert_eq!(format_confidence(0.045), "4.5");
        assert_eq!(format_confidence(0.0037), "0.37");
        assert_eq!(format_confidence(0.0), "0.00");
    }

    #[test]
    fn test_below_one_percent_has_two_decimals() {
        for i in 0..100 {
            let confidence = i as f32 / 10_000.0;
            let formatted = format_confidence(confidence);
            assert_eq!(decimals(&formatted), 2, "{} -> {}", confidence, formatted);
        }
    }

    #[test]
    fn test_one_to_hundred_percent_has_one_decimal() {
        for i in 11..1000 {
            let confidence = i as f32 / 1_000.0;
            let formatted = format_confidence(confidence);
            assert_eq!(decimals(&formatted), 1, "{} -> {}", confidence, formatted);
            assert!(!formatted.ends_with('%'));
        }
    }

    #[test]
    fn test_clean_label() {
        assert_eq!(clean_label("tabby cat, tabby"), "tabby cat");
        assert_eq!(clean_label("timber wolf, grey wolf, gray wolf"), "timber wolf");
        assert_eq!(clean_label("daisy"), "daisy");
    }

    #[test]
    fn test_line_uses_label_before_comma() {
        let line = format_prediction_line(&prediction("tabby cat, tabby", 0.5));

        assert_eq!(line, "tabby cat - 50.0%");
    }

    #[test]
    fn test_line_always_appends_percent_sign() {
        assert_eq!(format_prediction_line(&prediction("dog", 1.0)), "dog - 100%%");
        assert_eq!(
            format_top_predictions(&[prediction("dog", 1.0)], 2),
            vec!["dog - 100%%"]
        );
    }

    #[test]
    fn test_negative_zero_is_not_signed() {
        assert_eq!(format_confidence(-0.0), "0.00");
        assert_eq!(format_prediction_line(&prediction("dog", -0.0)), "dog - 0.00%");
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(format_top_predictions(&[], 2).is_empty());
    }

    #[test]
    fn test_top_two() {
        let predictions = vec![
            prediction("fox", 0.6),
            prediction("wolf, grey wolf", 0.3),
            prediction("dog", 0.1),
        ];

        assert_eq!(
            format_top_predictions(&predictions, 2),
            vec!["fox - 60.0%", "wolf - 30.0%"]
        );
    }

    #[test]
    fn test_limit_larger_than_input_returns_everything() {
        let predictions = vec![prediction("fox", 0.6), prediction("dog", 0.1)];

        assert_eq!(
            format_top_predictions(&predictions, 10),
            vec!["fox - 60.0%", "dog - 10.0%"]
        );
    }

    #[test]
    fn test_zero_limit() {
        assert!(format_top_predictions(&[prediction("fox", 0.6)], 0).is_empty());
    }

    #[test]
    fn test_order_is_kept_not_sorted() {
        let predictions = vec![prediction("dog", 0.1), prediction("fox", 0.6)];

        assert_eq!(
            format_top_predictions(&predictions, 1),
            vec!["dog - 10.0%"]
        );
    }

    #[test]
    fn test_same_input_same_output() {
        let predictions = vec![prediction("fox", 0.6), prediction("wolf, grey wolf", 0.3)];

        assert_eq!(
            format_top_predictions(&predictions, 2),
            format_top_predictions(&predictions, 2)
        );
    }

    #[test]
    fn test_rank_is_descending_and_stable() {
        let ranked = rank_predictions(vec![
            prediction("dog", 0.1),
            prediction("fox", 0.6),
            prediction("cat", 0.3),
            prediction("wolf", 0.3),
        ]);

        let labels: Vec<&str> = ranked.iter().map(|p| p.classification()).collect();
        assert_eq!(labels, vec!["fox", "cat", "wolf", "dog"]);
    }

    #[test]
    fn test_invalid_predictions_are_rejected() {
        assert_eq!(
            Prediction::new("", 0.5),
            Err(PredictionError::EmptyClassification)
        );
        assert_eq!(
            Prediction::new("fox", 1.5),
            Err(PredictionError::ConfidenceOutOfRange(1.5))
        );
        assert!(Prediction::new("fox", -0.1).is_err());
        assert!(Prediction::new("fox", f32::NAN).is_err());
    }
}
