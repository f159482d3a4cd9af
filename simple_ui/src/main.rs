use std::cmp::Ordering;

use cursive::{
    view::{Nameable, Resizable},
    views::{Button, Dialog, DummyView, LinearLayout, TextView},
    Cursive,
};
use cursive_table_view::{TableView, TableViewItem};
use log::info;
use memsim::{random_address, DefaultResolver, ResolutionResult, ResolveError, TraceEvent};
use rand::{rngs::StdRng, SeedableRng};

const TABLE_NAME: &str = "accesses";
const STATUS_NAME: &str = "status";

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
enum Column {
    Step,
    Address,
    Page,
    Offset,
    Frame,
    Tlb,
    PageTable,
    Cache,
    Data,
}

#[derive(Debug, Clone)]
struct AccessRow {
    step: usize,
    result: ResolutionResult,
}

impl AccessRow {
    fn page_table_outcome(&self) -> &'static str {
        self.result
            .trace
            .iter()
            .find_map(|event| match event {
                TraceEvent::PageTableHit { .. } => Some("hit"),
                TraceEvent::PageFault { .. } => Some("fault"),
                _ => None,
            })
            .unwrap_or("-")
    }

    fn sort_key(&self, column: Column) -> Option<i64> {
        match column {
            Column::Step => Some(self.step as i64),
            Column::Address => Some(self.result.virtual_address),
            Column::Page => Some(self.result.page as i64),
            Column::Offset => Some(self.result.offset as i64),
            Column::Frame => Some(self.result.frame as i64),
            _ => None,
        }
    }
}

fn hit_or_miss(hit: bool) -> String {
    String::from(if hit { "hit" } else { "miss" })
}

impl TableViewItem<Column> for AccessRow {
    fn to_column(&self, column: Column) -> String {
        match column {
            Column::Step => self.step.to_string(),
            Column::Address => self.result.virtual_address.to_string(),
            Column::Page => self.result.page.to_string(),
            Column::Offset => self.result.offset.to_string(),
            Column::Frame => self.result.frame.to_string(),
            Column::Tlb => hit_or_miss(self.result.tlb_hit()),
            Column::PageTable => self.page_table_outcome().to_string(),
            Column::Cache => hit_or_miss(self.result.cache_hit()),
            Column::Data => self.result.data.clone(),
        }
    }

    fn cmp(&self, other: &Self, column: Column) -> Ordering
    where
        Self: Sized,
    {
        match (self.sort_key(column), other.sort_key(column)) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => self.to_column(column).cmp(&other.to_column(column)),
        }
    }
}

fn make_table() -> TableView<AccessRow, Column> {
    TableView::<AccessRow, Column>::new()
        .column(Column::Step, "#", |c| c.width(5))
        .column(Column::Address, "Address", |c| c.width(9))
        .column(Column::Page, "Page", |c| c.width(6))
        .column(Column::Offset, "Offset", |c| c.width(8))
        .column(Column::Frame, "Frame", |c| c.width(7))
        .column(Column::Tlb, "TLB", |c| c.width(6))
        .column(Column::PageTable, "Page table", |c| c.width(12))
        .column(Column::Cache, "Cache", |c| c.width(7))
        .column(Column::Data, "Data", |c| c)
}

struct App {
    resolver: DefaultResolver,
    rng: StdRng,
    steps: usize,
}

impl App {
    fn init() -> Self {
        App {
            resolver: DefaultResolver::init(),
            rng: StdRng::from_entropy(),
            steps: 0,
        }
    }

    fn step(&mut self) -> Result<AccessRow, ResolveError> {
        let address = random_address(&mut self.rng);
        let result = self.resolver.resolve(address)?;
        self.steps += 1;
        Ok(AccessRow {
            step: self.steps,
            result,
        })
    }

    fn status(&self) -> String {
        let stats = self.resolver.stats();
        format!(
            "TLB {}/{} | cache {}/{} | pages mapped {} | TLB hit {:.0}% | cache hit {:.0}% | faults {}",
            self.resolver.tlb().len(),
            self.resolver.tlb().capacity(),
            self.resolver.cache().len(),
            self.resolver.cache().capacity(),
            self.resolver.page_table().len(),
            stats.tlb_hit_ratio() * 100.0,
            stats.cache_hit_ratio() * 100.0,
            stats.page_faults,
        )
    }
}

fn refresh_status(s: &mut Cursive) {
    let status = s.with_user_data(|app: &mut App| app.status());
    if let Some(status) = status {
        s.call_on_name(STATUS_NAME, |view: &mut TextView| view.set_content(status));
    }
}

fn on_step(s: &mut Cursive) {
    match s.with_user_data(|app: &mut App| app.step()) {
        Some(Ok(row)) => {
            s.call_on_name(TABLE_NAME, |table: &mut TableView<AccessRow, Column>| {
                table.insert_item(row);
            });
        }
        Some(Err(err)) => s.add_layer(Dialog::info(err.to_string())),
        None => {}
    }
    refresh_status(s);
}

fn on_run_ten(s: &mut Cursive) {
    for _ in 0..10 {
        on_step(s);
    }
}

fn on_reset(s: &mut Cursive) {
    s.with_user_data(|app: &mut App| {
        app.resolver.reset();
        app.steps = 0;
    });
    s.call_on_name(TABLE_NAME, |table: &mut TableView<AccessRow, Column>| {
        table.clear();
    });
    info!("Simulation reset");
    refresh_status(s);
}

fn main() {
    cursive::logger::init();
    let mut siv = cursive::default();
    siv.add_global_callback('q', |s| s.quit());
    siv.add_global_callback('~', |s| s.toggle_debug_console());
    siv.set_user_data(App::init());

    let buttons = LinearLayout::horizontal()
        .child(Button::new("Step", on_step))
        .child(DummyView)
        .child(Button::new("Run 10", on_run_ten))
        .child(DummyView)
        .child(Button::new("Reset", on_reset))
        .child(DummyView)
        .child(Button::new("Quit", |s| s.quit()));
    let layout = LinearLayout::vertical()
        .child(make_table().with_name(TABLE_NAME).min_size((90, 20)))
        .child(DummyView)
        .child(TextView::new("").with_name(STATUS_NAME))
        .child(DummyView)
        .child(buttons);

    siv.add_layer(Dialog::around(layout).title("memsim"));
    refresh_status(&mut siv);
    siv.run();
}
