mod demo;

pub use demo::create_demo_scene;
