use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    AnalysisError(#[from] analysis_client::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
