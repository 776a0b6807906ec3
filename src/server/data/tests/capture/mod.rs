use super::*;

use crate::server::data::capture::CaptureRepository;

mod attach_asset;
mod get_unregistered;
mod insert_missing;
