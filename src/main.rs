fn main() {
    if let Err(e) = particle_trail::core::Engine::run() {
        eprintln!("particle_trail failed: {}", e);
        std::process::exit(1);
    }
}
