//! AST elements, one file per section family

pub mod axle;
pub mod beam;
pub mod camera;
pub mod cinecam;
pub mod document;
pub mod flexbody;
pub mod node;
pub mod rail;
pub mod rope;
pub mod section;
pub mod submesh;
pub mod wheel;

pub use axle::Axle;
pub use beam::{Beam, Command, Hydro, Shock};
pub use camera::Camera;
pub use cinecam::Cinecam;
pub use document::{Document, Module, ROOT_MODULE_NAME};
pub use flexbody::Flexbody;
pub use node::Node;
pub use rail::{RailGroup, SlideNode};
pub use rope::{Hook, Rope, Tie};
pub use section::Section;
pub use submesh::{CabTriangle, Submesh};
pub use wheel::{FlexBodyWheel, MeshWheel, Wheel, Wheel2, WheelDef};
