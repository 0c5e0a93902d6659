use std::fmt;

use crate::roster::CharacterKey;

#[derive(Debug, PartialEq)]
pub enum BarError {
    OrderAlreadyTaken,
    AlreadyWaiting,
    NotWaiting,
    NoOrder,
    InvalidTransition,
    PatronNotInQueue(usize),
    SponsorNotFound(usize),
    UnknownCharacter(CharacterKey),
    NoVesselInFlight,
    EmptyMenu,
    ConfigReadError,
}

impl fmt::Display for BarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarError::OrderAlreadyTaken => write!(f, "patron already has an order"),
            BarError::AlreadyWaiting => write!(f, "patron is already waiting"),
            BarError::NotWaiting => write!(f, "patron is not waiting"),
            BarError::NoOrder => write!(f, "patron has no order"),
            BarError::InvalidTransition => write!(f, "patron can not wait again"),
            BarError::PatronNotInQueue(id) => write!(f, "patron {} is not in the queue", id),
            BarError::SponsorNotFound(id) => write!(f, "sponsor {} not found", id),
            BarError::UnknownCharacter(key) => write!(f, "character {:?} is not registered", key),
            BarError::NoVesselInFlight => write!(f, "there is no vessel to deliver"),
            BarError::EmptyMenu => write!(f, "the menu has no recipes"),
            BarError::ConfigReadError => write!(f, "could not read the configuration"),
        }
    }
}

impl std::error::Error for BarError {}

impl From<std::io::Error> for BarError {
    fn from(_: std::io::Error) -> Self {
        BarError::ConfigReadError
    }
}

impl From<serde_json::Error> for BarError {
    fn from(_: serde_json::Error) -> Self {
        BarError::ConfigReadError
    }
}
