use thiserror::Error;

use crate::model::CredentialError;
use crate::model::ReferenceError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}
