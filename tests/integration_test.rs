use linked_stack::{Choice, Command, Config, Console, Error, Flow, List};

#[test]
fn test_stack_discipline() {
    let mut list = List::new();
    for i in 1..=5 {
        list.push(i);
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    for expected in (1..=5).rev() {
        assert_eq!(list.peek(), Ok(&expected));
        assert_eq!(list.pop(), Ok(expected));
    }
    assert!(list.is_empty());
    assert_eq!(list.pop(), Err(Error::EmptyCollection));
}

#[test]
fn test_independent_lists() {
    let mut a = List::new();
    let mut b = List::new();
    a.push("a");
    b.push("b1");
    b.push("b2");

    assert_eq!(a.size(), 1);
    assert_eq!(b.size(), 2);
    assert_eq!(a.peek(), Ok(&"a"));
    assert_eq!(b.peek(), Ok(&"b2"));
}

#[test]
fn test_console_session() {
    let mut console = Console::new(Config::default(), Vec::new());
    let mut flow = Flow::Continue;

    for line in ["push 1", "1 2", "push 3", "2", "3", "4", "9", "5", "4", "exit"] {
        match Command::parse_choice(line) {
            Ok(Choice::Ready(command)) => flow = console.execute(command).unwrap(),
            Ok(Choice::NeedValue) => unreachable!("every push here has a value"),
            Err(e) => console.report(&e).unwrap(),
        }
    }

    assert_eq!(flow, Flow::Exit);
    assert!(console.list().is_empty());

    let out = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(
        out,
        "1\n1 -> 2\n1 -> 2 -> 3\n1 -> 2\ndata: 2\nsize: 2\n\
         error: unknown choice '9', expected 1-5\nclearing all data\nsize: 0\n"
    );
}
