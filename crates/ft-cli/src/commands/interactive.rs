use std::io::{BufRead, IsTerminal, Write};

use colored::Colorize;
use ft_core::input::{LuckyInput, parse_lucky_number};
use ft_core::{FortuneError, FortuneSession, SessionEvent};

use crate::render;

use super::SessionArgs;

pub fn run(args: &SessionArgs) -> Result<(), String> {
    let mut session = super::open_session(args)?;
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();

    if prompt {
        println!(
            "  {}",
            "Enter a lucky number (0 - 9999). :zh / :en switch language, reset, quit.".dimmed()
        );
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            print!("> ");
            let _ = std::io::stdout().flush();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| e.to_string())?;

        if !handle_line(&mut session, &line) {
            break;
        }
    }

    Ok(())
}

/// Handle one input line. Returns `false` when the session should end.
fn handle_line(session: &mut FortuneSession, line: &str) -> bool {
    if matches!(parse_lucky_number(line), LuckyInput::Number(_)) {
        render::wait_for_reveal(session.language(), session.config().reveal_delay);
    }

    match session.process(line) {
        Ok(SessionEvent::Nothing) => {}
        Ok(SessionEvent::Revealed(record)) => {
            let animation = session.animation_for(&record);
            render::print_fortune(&record, &animation, session.config().frame_interval);
        }
        Ok(SessionEvent::LanguageChanged { language, record }) => {
            println!("  {} {language}", "language:".dimmed());
            if let Some(record) = record {
                let animation = session.animation_for(&record);
                render::print_fortune(&record, &animation, session.config().frame_interval);
            }
        }
        Ok(SessionEvent::Reset) => println!("  {}", "cleared".dimmed()),
        Ok(SessionEvent::Quit) => return false,
        Err(e @ FortuneError::NotFound(_)) => eprintln!("  {e}"),
        Err(e) => eprintln!("error: {e}"),
    }
    true
}
