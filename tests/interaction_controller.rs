// Integration tests for the review form state machine.
// A scripted classifier stands in for the model and counts its calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use review_emotion::app::*;
use review_emotion::core::{ClassifierGateway, LabelScores, Result, ReviewError, TextClassifier};

#[derive(Default)]
struct ScriptedClassifier {
    responses: Mutex<VecDeque<Result<LabelScores>>>,
    queries: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    fn then(self, response: Result<LabelScores>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    fn then_label(self, label: &str, score: f32) -> Self {
        self.then(Ok(vec![(label.to_string(), score)]))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextClassifier for ScriptedClassifier {
    fn classify(&self, text: &str) -> Result<LabelScores> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(text.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ReviewError::Unexpected("no scripted response".into())))
    }
}

/// Gateway whose loader counts constructions and hands out a shared classifier.
fn counted_gateway(
    classifier: ScriptedClassifier,
) -> (ClassifierGateway<SharedClassifier>, Arc<ScriptedClassifier>, Arc<AtomicUsize>) {
    let classifier = Arc::new(classifier);
    let loads = Arc::new(AtomicUsize::new(0));

    let shared = Arc::clone(&classifier);
    let counter = Arc::clone(&loads);
    let gateway = ClassifierGateway::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(SharedClassifier(Arc::clone(&shared)))
    });
    (gateway, classifier, loads)
}

struct SharedClassifier(Arc<ScriptedClassifier>);

impl TextClassifier for SharedClassifier {
    fn classify(&self, text: &str) -> Result<LabelScores> {
        self.0.classify(text)
    }
}

fn form(category: Category, stars: u8, review: &str) -> FormInput {
    FormInput::new(category, Rating::new(stars).unwrap(), review)
}

#[test]
fn submit_shows_mapped_emotion() -> anyhow::Result<()> {
    let (gateway, classifier, _) =
        counted_gateway(ScriptedClassifier::default().then_label("joy", 0.9123));
    let mut controller = InteractionController::new(&gateway)?;

    let state = controller.submit(&form(
        Category::Mobile,
        5,
        "The product is extremely good.",
    ))?;

    assert_eq!(
        *state,
        DisplayState::Result {
            emotion: "Joy".into(),
            score: 0.9123
        }
    );
    assert_eq!(state.formatted_score().as_deref(), Some("0.9123"));
    assert_eq!(
        classifier.queries.lock().unwrap().as_slice(),
        ["Category: mobile, Rating: 5, Review: The product is extremely good."]
    );
    Ok(())
}

#[test]
fn unknown_label_degrades_gracefully() -> anyhow::Result<()> {
    let (gateway, _, _) =
        counted_gateway(ScriptedClassifier::default().then_label("disgust", 0.55));
    let mut controller = InteractionController::new(&gateway)?;

    let state = controller.submit(&form(Category::Books, 2, "Smells odd."))?;

    assert_eq!(
        *state,
        DisplayState::Result {
            emotion: UNKNOWN_EMOTION.into(),
            score: 0.55
        }
    );
    assert_eq!(state.formatted_score().as_deref(), Some("0.5500"));
    Ok(())
}

#[test]
fn mixed_case_labels_are_mapped() -> anyhow::Result<()> {
    let (gateway, _, _) = counted_gateway(
        ScriptedClassifier::default()
            .then_label("SADNESS", 0.4)
            .then_label("Surprise", 0.6),
    );
    let mut controller = InteractionController::new(&gateway)?;
    let review = form(Category::Refrigerator, 3, "It arrived dented.");

    assert!(matches!(
        controller.submit(&review)?,
        DisplayState::Result { emotion, .. } if emotion == "Sadness"
    ));
    assert!(matches!(
        controller.submit(&review)?,
        DisplayState::Result { emotion, .. } if emotion == "Surprise"
    ));
    Ok(())
}

#[test]
fn blank_review_warns_without_classifying() -> anyhow::Result<()> {
    let (gateway, classifier, loads) = counted_gateway(ScriptedClassifier::default());
    let mut controller = InteractionController::new(&gateway)?;

    for text in ["", "   ", "\n\t "] {
        let state = controller.dispatch(Action::Submit(form(Category::SmartTv, 1, text)))?;
        assert_eq!(*state, DisplayState::Warning(EMPTY_REVIEW_WARNING.into()));
    }

    assert_eq!(classifier.calls(), 0);
    assert_eq!(loads.load(Ordering::SeqCst), 0);
    assert!(!gateway.is_initialized());
    Ok(())
}

#[test]
fn refresh_returns_to_idle_from_any_state() -> anyhow::Result<()> {
    let (gateway, classifier, _) =
        counted_gateway(ScriptedClassifier::default().then_label("anger", 0.8));
    let mut controller = InteractionController::new(&gateway)?;
    assert_eq!(*controller.state(), DisplayState::Idle);

    controller.submit(&form(Category::Mobile, 1, " "))?;
    assert!(matches!(controller.state(), DisplayState::Warning(_)));
    assert_eq!(*controller.dispatch(Action::Refresh)?, DisplayState::Idle);

    controller.submit(&form(Category::Mobile, 1, "Broke in a day."))?;
    assert!(matches!(controller.state(), DisplayState::Result { .. }));
    assert_eq!(*controller.dispatch(Action::Refresh)?, DisplayState::Idle);

    assert_eq!(*controller.reset(), DisplayState::Idle);
    assert_eq!(classifier.calls(), 1);
    Ok(())
}

#[test]
fn inference_error_is_scoped_to_one_submit() -> anyhow::Result<()> {
    let (gateway, classifier, loads) = counted_gateway(
        ScriptedClassifier::default()
            .then(Err(ReviewError::Tokenization("input too long".into())))
            .then_label("neutral", 0.7),
    );
    let mut controller = InteractionController::new(&gateway)?;
    let review = form(Category::MobileAccessories, 4, "Does the job.");

    let err = controller.submit(&review).unwrap_err();
    assert!(matches!(err, ReviewError::Inference(_)));
    assert_eq!(*controller.state(), DisplayState::Idle);

    let state = controller.submit(&review)?;
    assert!(matches!(state, DisplayState::Result { emotion, .. } if emotion == "Neutral"));

    assert_eq!(classifier.calls(), 2);
    assert_eq!(loads.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn failed_submit_discards_previous_result() -> anyhow::Result<()> {
    let (gateway, _, _) = counted_gateway(
        ScriptedClassifier::default()
            .then_label("fear", 0.66)
            .then(Err(ReviewError::Unexpected("out of memory".into()))),
    );
    let mut controller = InteractionController::new(&gateway)?;
    let review = form(Category::Books, 3, "The ending scared me.");

    controller.submit(&review)?;
    assert!(controller.submit(&review).is_err());
    assert_eq!(*controller.state(), DisplayState::Idle);
    Ok(())
}

#[test]
fn controllers_share_one_gateway_instance() -> anyhow::Result<()> {
    let (gateway, _, loads) = counted_gateway(
        ScriptedClassifier::default()
            .then_label("joy", 0.9)
            .then_label("joy", 0.8),
    );

    let mut first = InteractionController::new(&gateway)?;
    first.submit(&form(Category::Mobile, 5, "Love it"))?;
    drop(first);

    let mut second = InteractionController::new(&gateway)?;
    second.submit(&form(Category::Mobile, 5, "Still love it"))?;

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    Ok(())
}
