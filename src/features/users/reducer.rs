use crate::features::users::intent::UsersIntent;
use crate::features::users::state::UsersState;
use crate::mvi::Reducer;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::SetAll(users) => UsersState { users },
            UsersIntent::Add(user) => {
                let mut users = state.users;
                users.push(user);
                UsersState { users }
            }
            UsersIntent::Update(user) => {
                let mut users = state.users;
                if let Some(slot) = users.iter_mut().find(|u| u.email == user.email) {
                    *slot = user;
                }
                UsersState { users }
            }
            UsersIntent::RemoveByEmail(email) => UsersState {
                users: state.users.into_iter().filter(|u| u.email != email).collect(),
            },
        }
    }
}
