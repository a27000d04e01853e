use std::io::{self, BufRead, Write};

use hatfield_core::{Direction, EngineState, PlayEngine};

const PROMPT: &str = "Which way do you want to go? ";
const INVALID_INPUT: &str = "Invalid input. Type U for UP, D for DOWN, L for LEFT, or R for RIGHT";

/// Runs one game over a line-based terminal until it ends or the input runs dry.
///
/// Running out of input counts as leaving the field.
pub fn run(
    engine: &mut PlayEngine,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<EngineState> {
    let mut line = String::new();

    while !engine.is_finished() {
        write!(output, "{engine}{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            log::info!("Input closed after {} moves", engine.moves());
            return report(EngineState::Exited, output);
        }

        let Some(direction) = Direction::from_command(&line) else {
            writeln!(output, "{INVALID_INPUT}")?;
            continue;
        };

        match engine.step(direction) {
            Ok(_) => {}
            Err(err) => log::error!("{}", err),
        }
    }

    report(engine.state(), output)
}

fn report(state: EngineState, mut output: impl Write) -> io::Result<EngineState> {
    if let Some(message) = state.message() {
        writeln!(output, "{message}")?;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(field: &str, input: &str) -> (EngineState, String, PlayEngine) {
        let mut engine = PlayEngine::new(field.parse().unwrap());
        let mut output = Vec::new();
        let state = run(&mut engine, input.as_bytes(), &mut output).unwrap();
        (state, String::from_utf8(output).unwrap(), engine)
    }

    #[test]
    fn winning_game_prints_each_turn_then_the_outcome() {
        let (state, output, _) = play("*░\nO^", "r\nD\n");

        assert_eq!(state, EngineState::Won);
        assert_eq!(
            output,
            "*░\nO^\nWhich way do you want to go? \
             **\nO^\nWhich way do you want to go? \
             You won! You found the hat!\n"
        );
    }

    #[test]
    fn invalid_input_reprompts_without_moving() {
        let (state, output, engine) = play("*░\nO^", "x\nup\n\nd\n");

        assert_eq!(state, EngineState::Fell);
        assert_eq!(output.matches(INVALID_INPUT).count(), 3);
        assert_eq!(output.matches(PROMPT).count(), 4);
        assert_eq!(engine.moves(), 1);
        assert!(output.ends_with("You fell in a hole! You lose!\n"));
    }

    #[test]
    fn stops_reading_once_the_game_ends() {
        let (state, output, engine) = play("*░\nO^", "u\nr\nr\n");

        assert_eq!(state, EngineState::Exited);
        assert_eq!(engine.moves(), 1);
        assert_eq!(output.matches(PROMPT).count(), 1);
        assert!(output.ends_with("You have left the field. Come back and try again later.\n"));
    }

    #[test]
    fn end_of_input_leaves_the_field() {
        let (state, output, engine) = play("*░░\n░^░\n░░░", "r\n");

        assert_eq!(state, EngineState::Exited);
        assert_eq!(engine.state(), EngineState::Playing);
        assert_eq!(engine.position(), (0, 1));
        assert!(output.ends_with("Come back and try again later.\n"));
    }
}
