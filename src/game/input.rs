//! Key events and their dispatch to the session

use super::error::InputError;
use super::renderer::Renderer;
use super::session::Session;
use crate::core::Feedback;

/// A logical key event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Backspace,
    Enter,
}

/// What an accepted key event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Typed,
    Deleted,
    Submitted(Feedback),
}

/// Route one key event to the matching session operation
///
/// Returns `None` when the game is already over: such events are dropped
/// before they reach the session.
pub fn dispatch<R>(
    session: &mut Session,
    renderer: &mut R,
    key: KeyInput,
) -> Option<Result<Handled, InputError>>
where
    R: Renderer + ?Sized,
{
    if session.is_over() {
        tracing::trace!(?key, "input ignored after game over");
        return None;
    }

    tracing::debug!(?key, "key event");
    let result = match key {
        KeyInput::Letter(c) => session.add_letter(c, renderer).map(|()| Handled::Typed),
        KeyInput::Backspace => session.delete_letter(renderer).map(|()| Handled::Deleted),
        KeyInput::Enter => session.submit_guess(renderer).map(Handled::Submitted),
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, NullRenderer};

    fn press_all(session: &mut Session, keys: &[KeyInput]) -> Vec<Option<Result<Handled, InputError>>> {
        keys.iter()
            .map(|&key| dispatch(session, &mut NullRenderer, key))
            .collect()
    }

    #[test]
    fn keys_route_to_operations() {
        let mut session = Session::new(GameConfig::default());
        let results = press_all(
            &mut session,
            &[
                KeyInput::Letter('W'),
                KeyInput::Backspace,
                KeyInput::Backspace,
                KeyInput::Enter,
            ],
        );

        assert_eq!(results[0], Some(Ok(Handled::Typed)));
        assert_eq!(results[1], Some(Ok(Handled::Deleted)));
        assert_eq!(results[2], Some(Err(InputError::NothingToDelete)));
        assert_eq!(
            results[3],
            Some(Err(InputError::RowIncomplete { filled: 0 }))
        );
    }

    #[test]
    fn enter_on_full_row_submits() {
        let mut session = Session::new(GameConfig::default());
        let keys: Vec<KeyInput> = "WORDS".chars().map(KeyInput::Letter).collect();
        press_all(&mut session, &keys);

        let result = dispatch(&mut session, &mut NullRenderer, KeyInput::Enter);
        assert_eq!(result, Some(Ok(Handled::Submitted(Feedback::PERFECT))));
    }

    #[test]
    fn input_after_game_over_is_dropped() {
        let mut session = Session::new(GameConfig::default());
        let mut keys: Vec<KeyInput> = "WORDS".chars().map(KeyInput::Letter).collect();
        keys.push(KeyInput::Enter);
        press_all(&mut session, &keys);
        assert!(session.is_over());

        let results = press_all(
            &mut session,
            &[KeyInput::Letter('A'), KeyInput::Backspace, KeyInput::Enter],
        );
        assert!(results.iter().all(Option::is_none));
        assert_eq!(session.history().len(), 1);
    }
}
