use basic::mach::{Event, Listing, Runtime};

pub fn run(source: &str) -> String {
    let mut r = Runtime::seeded(1978);
    r.set_listing(&Listing::load(source));
    exec(&mut r)
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000).0
}

pub fn drawings(source: &str) -> (String, Vec<String>) {
    let mut r = Runtime::seeded(1978);
    r.set_listing(&Listing::load(source));
    exec_n(&mut r, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> (String, Vec<String>) {
    let mut s = String::new();
    let mut documents = vec![];
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Input(ps) => {
                s.push_str(&ps);
                break;
            }
            Event::Drawing(document) => {
                documents.push(document.clone());
            }
            Event::End => {
                s.push_str("END\n");
            }
        }
        prev_running = event == Event::Running;
    }
    (s, documents)
}
