//! Addressbook resource model and the backends that store it.

pub mod domain;
pub mod lifecycle;
pub mod provider;
pub mod memory;
pub mod seaorm;

pub use domain::{Address, AddressType, Addressbook, AttributeType, AuditFields, Contact, MessageType, Org, OrgType};
pub use provider::{RequestContext, ServiceProvider, SharedProvider};
pub use memory::InMemoryServiceProvider;
pub use seaorm::SeaOrmServiceProvider;
