pub mod phonepe;
pub mod traits;

pub mod prelude {
    pub use super::phonepe::prelude::*;
    pub use super::traits::Parser;
}
