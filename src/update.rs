use crate::{LoadableData, LoadableDataEvent};
use boolinator::Boolinator;

/// Produces the next state for `event`, consuming `previous`.
///
/// Dispatch is on the event alone. The previous state only contributes its
/// payload, and only when the event's `store_date` flag requests retention.
/// Retaining from a state with no payload yields no payload.
pub fn loadable_data_update<T, E>(
    previous: LoadableData<T, E>,
    event: LoadableDataEvent<T, E>,
) -> LoadableData<T, E> {
    match event {
        LoadableDataEvent::Loading { store_date } => LoadableData::Loading {
            data: store_date.as_option().and_then(|_| previous.into_data()),
        },
        LoadableDataEvent::Success { data } => LoadableData::Success { data },
        LoadableDataEvent::Failed {
            store_date,
            failure,
        } => LoadableData::Failed {
            data: store_date.as_option().and_then(|_| previous.into_data()),
            failure,
        },
    }
}
