use tracing::debug;

use crate::render;

use super::SessionArgs;

pub fn run(args: &SessionArgs, number: &str, json: bool) -> Result<(), String> {
    let mut session = super::open_session(args)?;

    if !json {
        render::wait_for_reveal(session.language(), session.config().reveal_delay);
    }

    let record = session
        .reveal(number)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "no lucky number given".to_string())?;
    debug!(number = record.number, score = record.score, "revealed");

    if json {
        return render::print_json(&record);
    }

    let animation = session.animation_for(&record);
    render::print_fortune(&record, &animation, session.config().frame_interval);
    Ok(())
}
