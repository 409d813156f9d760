//! Fixture plumbing shared by the scrape integration suites.

pub mod corpus;
