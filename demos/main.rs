use turnq::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut tasks = PriorityQueue::new();

    tasks.enqueue("write report", 2);
    tasks.enqueue("fix outage", 9);
    tasks.enqueue("review PR", 2);
    tasks.enqueue("lunch", 5);

    println!("TASKS {tasks}");
    println!("NEXT {}", tasks.dequeue()?);

    let mut players = TurnQueue::new();

    players.add_person("Ann", 1);
    players.add_person("Bob", 0);
    players.add_person("Cid", 2);

    for _ in 0..6 {
        println!("TURN {}", players.get_next_person()?);
    }
    println!("LEFT {}", players.len());

    Ok(())
}
