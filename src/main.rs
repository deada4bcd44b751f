use call_probe::probe;
use serde::Serialize;

#[derive(Serialize)]
struct Request {
    path: String,
    attempts: u32,
    tags: Vec<String>,
}

fn main() {
    let count = 3;
    let request = Request {
        path: "/api/v1/items".to_string(),
        attempts: 2,
        tags: vec!["retry".to_string(), "slow".to_string()],
    };
    let note = "first line\nsecond line";

    probe!(count, count * 2 + 1, "checkpoint");
    probe!(request, note);
    probe!(vec![vec![1, 2], vec![3, 4]]);
}
