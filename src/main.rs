use anyhow::Result;
use clap::Parser;
use glam::Vec3;

use gpu_scene::cli::Cli;
use gpu_scene::object::ObjectKind;
use gpu_scene::scene_file::load_scene_file;
use gpu_scene::scenes::create_demo_scene;
use gpu_scene::types::SendList;

fn print_stats(label: &str, object_count: usize, send: &SendList) {
    println!("{}: {} object(s)", label, object_count);
    println!("  boxes:     {}", send.boxes.len());
    println!("  spheres:   {}", send.spheres.len());
    println!("  triangles: {}", send.triangles.len());
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scene = match &cli.scene {
        Some(path) => load_scene_file(path)?,
        None => create_demo_scene()?,
    };

    let send = scene.build_send_list();
    if !cli.quiet {
        print_stats("Scene", scene.len(), &send);
    }

    if let Some(spin) = cli.spin {
        for object in scene.objects_mut() {
            if object.kind != ObjectKind::Mesh {
                continue;
            }
            let mut target = object.placement();
            target.rotation += Vec3::new(0.0, spin, 0.0);
            object.update(target)?;
        }

        let send = scene.build_send_list();
        if !cli.quiet {
            print_stats(&format!("After {} degree spin", spin), scene.len(), &send);
        }
    }

    Ok(())
}
