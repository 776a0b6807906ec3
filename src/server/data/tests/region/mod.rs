use super::*;

use crate::server::data::region::RegionRepository;

mod create;
mod get_all;
