pub mod credentials;
pub mod dashboard;
pub mod recipe;

pub mod prelude {
    pub use crate::{credentials::*, dashboard::*, recipe::*};

    pub use std::collections::BTreeMap;

    pub use serde::{Deserialize, Serialize};
}
