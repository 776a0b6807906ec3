use super::*;

use entity::sea_orm_active_enums::AnalysisStatus;
use sea_orm::EntityTrait;

use crate::server::data::analysis::AnalysisRepository;

mod get_pending;
mod resolve;
