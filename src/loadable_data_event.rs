use serde::{Deserialize, Serialize};

/// Lifecycle signal of the external load operation: started, succeeded or
/// failed. `store_date` controls whether the previous payload is carried
/// forward into the next state.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadableDataEvent<T, E> {
    #[serde(rename = "isLoading", rename_all = "camelCase")]
    Loading { store_date: bool },
    Success { data: T },
    #[serde(rename_all = "camelCase")]
    Failed { store_date: bool, failure: E },
}

impl<T, E> LoadableDataEvent<T, E> {
    pub fn loading(store_date: bool) -> Self {
        LoadableDataEvent::Loading { store_date }
    }

    pub fn success(data: T) -> Self {
        LoadableDataEvent::Success { data }
    }

    pub fn failed(failure: E, store_date: bool) -> Self {
        LoadableDataEvent::Failed {
            store_date,
            failure,
        }
    }
}
