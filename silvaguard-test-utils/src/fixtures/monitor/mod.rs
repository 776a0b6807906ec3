use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn monitor<'a>(&'a mut self) -> MonitorFixtures<'a> {
        MonitorFixtures { setup: self }
    }
}

pub struct MonitorFixtures<'a> {
    pub setup: &'a mut TestContext,
}
