use super::*;

use crate::server::data::alert::{AlertRepository, NewAlert};
