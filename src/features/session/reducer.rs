use crate::features::session::intent::SessionIntent;
use crate::features::session::state::SessionState;
use crate::mvi::Reducer;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SignIn(user) => SessionState { user: Some(user) },
            SessionIntent::SignOut => SessionState { user: None },
        }
    }
}
