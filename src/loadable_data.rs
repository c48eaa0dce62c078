use crate::{loadable_data_update, LoadableDataEvent};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::mem;

/// Load lifecycle of a value of type `T` with an opaque failure of type `E`.
///
/// `data` on the `Init`, `Loading` and `Failed` variants, when present, is a
/// previously successful payload retained across a transition.
#[derive(Derivative, Clone, PartialEq, Serialize, Deserialize, Debug)]
#[derivative(Default(bound = ""))]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadableData<T, E> {
    #[derivative(Default)]
    Init {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<T>,
    },
    #[serde(rename = "isLoading")]
    Loading {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<T>,
    },
    Success {
        data: T,
    },
    Failed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<T>,
        failure: E,
    },
}

impl<T, E> LoadableData<T, E> {
    /// Starting state, optionally pre-seeded with a payload (e.g. from a cache).
    pub fn init(data: Option<T>) -> Self {
        LoadableData::Init { data }
    }

    /// Applies `event` in place, replacing `self` with the next state.
    pub fn update(&mut self, event: LoadableDataEvent<T, E>) {
        *self = loadable_data_update(mem::take(self), event);
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadableData::Init { data } => data.as_ref(),
            LoadableData::Loading { data } => data.as_ref(),
            LoadableData::Success { data } => Some(data),
            LoadableData::Failed { data, .. } => data.as_ref(),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            LoadableData::Init { data } => data,
            LoadableData::Loading { data } => data,
            LoadableData::Success { data } => Some(data),
            LoadableData::Failed { data, .. } => data,
        }
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            LoadableData::Failed { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn is_init(&self) -> bool {
        match self {
            LoadableData::Init { .. } => true,
            _ => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            LoadableData::Loading { .. } => true,
            _ => false,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            LoadableData::Success { .. } => true,
            _ => false,
        }
    }

    pub fn is_failed(&self) -> bool {
        match self {
            LoadableData::Failed { .. } => true,
            _ => false,
        }
    }
}
