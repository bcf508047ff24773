use stackcall::{
    table::{CallbackTable, Handle},
    Callable,
};
use std::cell::Cell;

type Handler<'a> = Callable<'a, fn(u32) -> u32>;

fn double(value: u32) -> u32 {
    value * 2
}

fn square(value: u32) -> u32 {
    value * value
}

struct Accumulator {
    total: Cell<u32>,
}

impl Accumulator {
    fn add(&self, value: u32) -> u32 {
        self.total.set(self.total.get() + value);
        self.total.get()
    }
}

#[test]
fn register_and_dispatch() {
    let accumulator = Accumulator {
        total: Cell::new(10),
    };

    let table = CallbackTable::<fn(u32) -> u32, 3>::new();
    assert!(table.is_empty());
    assert_eq!(table.capacity(), 3);

    let doubled = table.register(Handler::from_fn(double)).unwrap();
    let added = table
        .register(Handler::from_method(&accumulator, Accumulator::add))
        .unwrap();

    assert_eq!(doubled, Handle::from_index(0));
    assert_eq!(added, Handle::from_index(1));
    assert_eq!(table.len(), 2);

    assert_eq!(table.dispatch(doubled, (21,)), Ok(42));
    assert_eq!(table.dispatch(added, (4,)), Ok(14));
    assert_eq!(accumulator.total.get(), 14);

    let vacant = table.dispatch(Handle::from_index(2), (1,)).unwrap_err();
    assert!(vacant.is_vacant());
    insta::assert_snapshot!(vacant, @"no callback registered at index 2");

    let out_of_bounds = table.dispatch(Handle::from_index(7), (1,)).unwrap_err();
    assert!(!out_of_bounds.is_vacant());
    assert_eq!(out_of_bounds.index(), 7);
    insta::assert_snapshot!(out_of_bounds, @"index 7 is out of bounds for a table of 3 callbacks");
}

#[test]
fn full_table() {
    let table = CallbackTable::<fn(u32) -> u32, 2>::new();

    table.register(Handler::from_fn(double)).unwrap();
    table.register(Handler::from_fn(square)).unwrap();

    let full = table.register(Handler::from_fn(double)).unwrap_err();
    assert_eq!(full.capacity(), 2);
    insta::assert_snapshot!(full, @"all 2 callback slots are in use");

    let removed = table.unregister(Handle::from_index(0)).unwrap();
    assert_eq!(removed.call(5), 10);
    assert_eq!(table.register(Handler::from_fn(square)), Ok(Handle::from_index(0)));
    assert_eq!(table.dispatch(Handle::from_index(0), (5,)), Ok(25));
}

#[test]
fn replace_and_unregister() {
    let table = CallbackTable::<fn(u32) -> u32, 4>::new();
    let handle = Handle::from_index(3);

    assert!(table.replace(handle, Handler::from_fn(double)).unwrap().is_none());
    let previous = table.replace(handle, Handler::from_fn(square)).unwrap();
    assert_eq!(previous.map(|callable| callable.call(3)), Some(6));
    assert_eq!(table.get(handle).map(|callable| callable.call(3)), Ok(9));

    assert!(table.replace(Handle::from_index(4), Handler::from_fn(double)).is_err());

    assert!(table.unregister(handle).is_ok());
    assert!(table.unregister(handle).unwrap_err().is_vacant());
    assert!(table.is_empty());
}

#[test]
fn broadcast_in_slot_order() {
    let accumulator = Accumulator {
        total: Cell::new(0),
    };

    let table = CallbackTable::<fn(u32) -> u32, 5>::new();
    table
        .replace(Handle::from_index(4), Handler::from_fn(square))
        .unwrap();
    table
        .replace(
            Handle::from_index(1),
            Handler::from_method(&accumulator, Accumulator::add),
        )
        .unwrap();
    table
        .replace(Handle::from_index(2), Handler::from_fn(double))
        .unwrap();

    let mut results = Vec::new();
    let invoked = table.broadcast_with((3,), |handle, result| {
        results.push((handle.index(), result));
    });

    assert_eq!(invoked, 3);
    assert_eq!(results, [(1, 3), (2, 6), (4, 9)]);

    assert_eq!(table.broadcast((2,)), 3);
    assert_eq!(accumulator.total.get(), 5);

    let handles: Vec<u32> = table.iter().map(|(handle, _)| handle.index()).collect();
    assert_eq!(handles, [1, 2, 4]);

    table.clear();
    assert_eq!(table.broadcast((1,)), 0);
}

#[test]
fn callbacks_modify_table() {
    struct Unsubscriber<'t, 'a> {
        table: &'t CallbackTable<'a, fn(u32) -> u32, 2>,
    }

    impl Unsubscriber<'_, '_> {
        fn once(&self, value: u32) -> u32 {
            let _ = self.table.unregister(Handle::from_index(0));
            value + 1
        }
    }

    let table = CallbackTable::<fn(u32) -> u32, 2>::new();
    let unsubscriber = Unsubscriber { table: &table };

    table
        .register(Handler::from_method(&unsubscriber, Unsubscriber::once))
        .unwrap();
    table.register(Handler::from_fn(double)).unwrap();

    assert_eq!(table.broadcast((1,)), 2);
    assert_eq!(table.len(), 1);
    assert_eq!(table.broadcast((1,)), 1);
}

#[test]
fn from_array() {
    let table = CallbackTable::from([Handler::from_fn(double), Handler::from_fn(square)]);

    assert_eq!(table.len(), 2);
    assert_eq!(table.dispatch(Handle::from_index(1), (7,)), Ok(49));
    assert_eq!(format!("{}", Handle::from_index(1)), "#1");
}
