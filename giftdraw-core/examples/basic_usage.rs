use giftdraw_core::{Command, Controller, Language, Phase};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut controller = Controller::with_language(Language::En);

    let frame = controller.render();
    println!("{}", frame.title);
    println!("{}", frame.subtitle);

    println!("\nStarting a draw for 5 participants...");
    controller.handle(Command::Start {
        count: "5".to_string(),
    })?;

    while controller.phase() == Phase::Drawing {
        controller.handle(Command::Draw)?;
        let frame = controller.render();
        println!(
            "{}: {}",
            frame.draw_message.unwrap_or_default(),
            frame.number_display.unwrap_or_default()
        );
    }

    if let Some(session) = controller.session() {
        println!("\nDraw order: {:?}", session.info().history);
    }

    // Same state, rendered in Traditional Chinese
    controller.handle(Command::ToggleLanguage)?;
    let frame = controller.render();
    println!("\n{}", frame.title);
    for entry in frame.results {
        println!("  {}", entry);
    }

    Ok(())
}
