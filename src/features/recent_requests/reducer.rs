use crate::features::recent_requests::intent::RecentRequestsIntent;
use crate::features::recent_requests::state::RecentRequestsState;
use crate::mvi::Reducer;

pub struct RecentRequestsReducer;

impl Reducer for RecentRequestsReducer {
    type State = RecentRequestsState;
    type Intent = RecentRequestsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RecentRequestsIntent::SetAll(requests) => RecentRequestsState { requests },
            RecentRequestsIntent::Add(request) => {
                let mut requests = state.requests;
                requests.insert(0, request);
                RecentRequestsState { requests }
            }
            RecentRequestsIntent::Update(request) => {
                let mut requests = state.requests;
                if let Some(slot) = requests.iter_mut().find(|r| r.id == request.id) {
                    *slot = request;
                }
                RecentRequestsState { requests }
            }
            RecentRequestsIntent::Reset => RecentRequestsState::default(),
        }
    }
}
