use envbind::Configuration;

#[derive(Configuration)]
enum Config {
    Debug,
}

fn main() {
    let _ = Config::Debug;
}
