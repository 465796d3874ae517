use envbind::Configuration;

#[derive(Configuration)]
struct Config(pub u16);

fn main() {
    let _ = Config(8080).0;
}
