pub mod assembler;
pub mod distributor;
pub mod error;
pub mod mapper;

pub use assembler::SynsetAssembler;
pub use distributor::{OutOfRangeError, PositionalDistributor, WordSlot};
pub use error::{AssembleError, SynsetCreateError};
pub use mapper::{MappingError, SynsetDataMapper, WordNetMapper};
