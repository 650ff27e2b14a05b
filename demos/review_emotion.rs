use anyhow::Result;
use review_emotion::app::*;
use review_emotion::core::{ClassifierConfig, ClassifierGateway};
use review_emotion::pipelines::EmotionClassificationPipelineBuilder;

fn main() -> Result<()> {
    println!("Building pipeline...");

    let config = ClassifierConfig::default();
    let gateway = ClassifierGateway::new(move || {
        EmotionClassificationPipelineBuilder::from_config(&config).build()
    });
    gateway.initialize()?;

    println!("Pipeline built successfully.");

    let mut controller = InteractionController::new(&gateway)?;
    let reviews = [
        ("mobile", "5", "The product is extremely good."),
        ("books", "1", "I regret buying this product as it turned out to be extremely unsatisfactory."),
        ("smartTv", "3", "   "),
    ];

    for (category, rating, text) in reviews {
        let form = FormInput::parse(category, rating, text)?;
        let state = controller.dispatch(Action::Submit(form))?;

        println!("\n=== {category}, {rating} stars ===");
        println!("Review: \"{text}\"");
        match state {
            DisplayState::Result { emotion, score } => {
                println!("Emotion: {emotion} (confidence: {score:.4})")
            }
            other => println!("{other}"),
        }
        controller.dispatch(Action::Refresh)?;
    }

    Ok(())
}
