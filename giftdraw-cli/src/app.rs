use crate::config::CliConfig;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::{Input, Select};
use giftdraw_core::{Command, Controller, Frame, Language, Phase};

/// Rows shown while the results list is collapsed.
const COLLAPSED_ROWS: usize = 5;

/// The language switch is labeled in both languages, like the globe button
/// on the original page.
const LANGUAGE_ITEM: &str = "中文 / English";

pub fn run(config: &CliConfig) -> Result<()> {
    let mut controller = Controller::with_language(config.language);

    loop {
        let frame = controller.render();
        let keep_going = match controller.phase() {
            Phase::Setup => setup_screen(&mut controller, &frame)?,
            Phase::Drawing => drawing_screen(&mut controller, &frame)?,
            Phase::Results => results_screen(&mut controller, &frame)?,
        };
        if !keep_going {
            break;
        }
    }

    Ok(())
}

fn setup_screen(controller: &mut Controller, frame: &Frame) -> Result<bool> {
    println!();
    println!("=== {} ===", frame.title);
    println!("{}", frame.subtitle);
    println!();

    let items = [
        frame.start_label.as_str(),
        LANGUAGE_ITEM,
        quit_item(controller.language()),
    ];
    match Select::new().items(&items).default(0).interact()? {
        0 => {
            let count: String = Input::new()
                .with_prompt(frame.placeholder.as_str())
                .allow_empty(true)
                .interact_text()?;
            if let Err(e) = controller.handle(Command::Start { count }) {
                // The original tool surfaces this as a blocking alert.
                println!("{}", controller.language().invalid_count_message());
                tracing::debug!("rejected count input: {}", e);
            }
        }
        1 => {
            controller.handle(Command::ToggleLanguage)?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn drawing_screen(controller: &mut Controller, frame: &Frame) -> Result<bool> {
    println!();
    if let (Some(message), Some(number)) = (&frame.draw_message, &frame.number_display) {
        println!("{}", message);
        println!();
        println!("      {}", number);
        println!();
    }

    let mut items = vec![frame.draw_label.clone()];
    let mut commands = vec![Command::Draw];
    if frame.redraw_available {
        items.push(frame.redraw_label.clone());
        commands.push(Command::Redraw);
    }
    items.push(LANGUAGE_ITEM.to_string());
    commands.push(Command::ToggleLanguage);
    items.push(quit_item(controller.language()).to_string());

    let selection = Select::new().items(&items).default(0).interact()?;
    if selection == items.len() - 1 {
        return Ok(false);
    }
    controller.handle(commands[selection].clone())?;
    Ok(true)
}

fn results_screen(controller: &mut Controller, frame: &Frame) -> Result<bool> {
    println!();
    if let (Some(message), Some(number)) = (&frame.draw_message, &frame.number_display) {
        println!("{}", message);
        println!();
        println!("      {}", number);
        println!();
    }
    if frame.results_visible {
        print_results_table(frame);
    }

    let mut items = vec![frame.all_results_label.clone()];
    let mut commands = vec![Command::ToggleResults];
    if frame.results_visible {
        items.push(frame.collapse_label.clone());
        commands.push(Command::ToggleCollapse);
    }
    items.push(frame.restart_label.clone());
    commands.push(Command::Restart);
    items.push(LANGUAGE_ITEM.to_string());
    commands.push(Command::ToggleLanguage);
    items.push(quit_item(controller.language()).to_string());

    let selection = Select::new().items(&items).default(0).interact()?;
    if selection == items.len() - 1 {
        return Ok(false);
    }
    controller.handle(commands[selection].clone())?;
    Ok(true)
}

fn print_results_table(frame: &Frame) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![frame.all_results_label.as_str()]);

    let shown = if frame.results_collapsed {
        frame.results.len().min(COLLAPSED_ROWS)
    } else {
        frame.results.len()
    };
    for entry in &frame.results[..shown] {
        table.add_row(vec![entry.as_str()]);
    }
    if shown < frame.results.len() {
        table.add_row(vec!["..."]);
    }

    println!("{}", table);
}

fn quit_item(language: Language) -> &'static str {
    match language {
        Language::Zh => "離開",
        Language::En => "QUIT",
    }
}
