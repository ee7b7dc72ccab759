use std::sync::{Arc, Mutex};

use radixwatch::LineSink;

#[allow(unused)]
pub fn line_watcher() -> (LineSink, Box<dyn Fn() -> Vec<String> + Send + Sync>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink: LineSink = {
        let lines = lines.clone();
        Arc::new(move |line: &str| {
            lines.lock().unwrap().push(line.to_string());
        })
    };

    let check = Box::new(move || {
        let lines: Vec<String> = lines.lock().unwrap().drain(..).collect();
        lines
    });

    (sink, check)
}
