//! The `stackcall` command line interface, which dispatches through [`Callable`]s.

use stackcall::{table::CallbackTable, Callable};
use std::cell::Cell;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Adds two numbers through a wrapped free function.
    Add {
        /// The left operand.
        a: i64,
        /// The right operand.
        b: i64,
    },
    /// Increments a counter through a wrapped method.
    Counter {
        /// The initial value of the counter.
        #[arg(long, default_value_t = 0)]
        start: i64,
        /// The amount added on each call.
        #[arg(long, default_value_t = 1)]
        by: i64,
        /// The number of calls to make.
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Registers functions and methods in a callback table, then invokes all of them.
    Table {
        /// The value passed to every callback.
        value: i64,
        /// The initial value of the counter registered in the table.
        #[arg(long, default_value_t = 0)]
        start: i64,
    },
}

type Handler<'a> = Callable<'a, fn(i64) -> Option<i64>>;

struct Counter {
    count: Cell<i64>,
}

impl Counter {
    fn new(start: i64) -> Self {
        Self {
            count: Cell::new(start),
        }
    }

    fn increment(&self, by: i64) -> Option<i64> {
        let count = self.count.get().checked_add(by)?;
        self.count.set(count);
        Some(count)
    }
}

fn checked_add(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

fn double(value: i64) -> Option<i64> {
    value.checked_mul(2)
}

fn square(value: i64) -> Option<i64> {
    value.checked_mul(value)
}

pub fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    let arguments = <Arguments as clap::Parser>::parse();

    match arguments.command {
        Command::Add { a, b } => {
            let add = Callable::<fn(i64, i64) -> Option<i64>>::from_fn(checked_add);
            let sum = add
                .call(a, b)
                .with_context(|| format!("{a} + {b} overflowed"))?;

            println!("{sum}");
            Ok(())
        }
        Command::Counter { start, by, times } => {
            let counter = Counter::new(start);
            let increment = Handler::from_method(&counter, Counter::increment);

            for _ in 0..times {
                let count = increment.call(by).with_context(|| {
                    format!("counter overflowed after reaching {}", counter.count.get())
                })?;

                println!("{count}");
            }

            Ok(())
        }
        Command::Table { value, start } => {
            let counter = Counter::new(start);
            let table = CallbackTable::<fn(i64) -> Option<i64>, 4>::new();

            for (name, handler) in [
                ("double", Handler::from_fn(double)),
                ("square", Handler::from_fn(square)),
                ("counter", Handler::from_method(&counter, Counter::increment)),
            ] {
                let handle = table
                    .register(handler)
                    .with_context(|| format!("could not register {name} handler"))?;

                eprintln!("registered {name} handler as {handle}");
            }

            let invoked = table.broadcast_with((value,), |handle, result| match result {
                Some(result) => println!("{handle}: {result}"),
                None => println!("{handle}: overflow"),
            });

            eprintln!("invoked {invoked} handlers");
            Ok(())
        }
    }
}
