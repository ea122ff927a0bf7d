#![cfg(feature = "serde")]

use choices::WeightedChoice;
use choices::Weights;

#[test]
fn object_is_a_mapping() {
    let weights: Weights<String> =
        serde_json::from_str(r#"{"happy": 0.3, "neutral": 0.6, "sad": 0.1}"#).unwrap();
    assert!(matches!(weights, Weights::Map(_)));

    let mood = WeightedChoice::new(weights).unwrap();
    let order = mood
        .distribution()
        .iter()
        .map(|(key, _)| key.as_str())
        .collect::<Vec<_>>();
    assert_eq!(order, ["sad", "happy", "neutral"]);
}

#[test]
fn array_is_a_pair_sequence() {
    let weights: Weights<String> =
        serde_json::from_str(r#"[["ducks", 12], ["sparrows", 4], ["geese", 0]]"#).unwrap();
    let Weights::Pairs(pairs) = &weights else {
        panic!("expected pairs, got {weights:?}");
    };
    assert_eq!(pairs[0], ("ducks".to_owned(), 12.0));

    let birds = WeightedChoice::new(weights).unwrap();
    assert_eq!(birds.probability_of(&"geese".to_owned()), Ok(0.0));
    assert_eq!(birds.probability_of(&"ducks".to_owned()), Ok(0.75));
}

#[test]
fn distribution_serializes_as_entries() {
    let choice = WeightedChoice::new(vec![("b", 3), ("a", 1)]).unwrap();
    let json = serde_json::to_value(choice.distribution()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "key": "a", "probability": 0.25 },
            { "key": "b", "probability": 0.75 }
        ])
    );
}
