//! Integration tests for the gateway's remote API client, run against an
//! in-process mock of the school API.

pub mod common;

#[cfg(test)]
mod remote_auth_tests;
#[cfg(test)]
mod remote_list_tests;
#[cfg(test)]
mod remote_mutation_tests;
