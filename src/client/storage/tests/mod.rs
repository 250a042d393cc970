use super::*;

use crate::client::util::test::{MemoryStorage, TestBuilder};

mod read_credential;
