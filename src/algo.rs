pub mod strong_components;

pub use strong_components::StrongComponents;
