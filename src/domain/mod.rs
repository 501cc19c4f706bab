// Domain layer: the customer record and profile shapes the transform works on.

pub mod model;

pub use model::{
    Account, AccountTier, Address, AgeStatus, Contact, CustomerProfile, CustomerRecord,
    Preferences, ProfileAddress, Settings,
};
