//! C source emitters.
//!
//! The firmware build includes these fragments verbatim, so the line layout
//! is fixed: one `[index] = value,` designated initializer per line, four
//! spaces of indent, and the length constant named in the array bound.

use crate::tables::{PeriodTable, SineTable, Table};
const STDINT_INCLUDE: &str = "#include <stdint.h>\n";

/// `N_SAMPLES` is guarded because other generated headers may define it too.
fn write_sample_constants(out: &mut String, n_samples: usize) {
    out.push_str("#ifndef _CONSTANTS\n");
    out.push_str("#define _CONSTANTS\n");
    out.push_str(&format!("#define N_SAMPLES {}\n", n_samples));
    out.push_str("#endif\n");
}

pub fn render_sine(table: &SineTable) -> String {
    let mut out = String::from(STDINT_INCLUDE);
    write_sample_constants(&mut out, table.samples.len());
    out.push_str("const uint8_t sine[N_SAMPLES] = {\n");
    for (i, sample) in table.samples.iter().enumerate() {
        out.push_str(&format!("    [{}] = {},\n", i, sample));
    }
    out.push_str("};\n");
    out
}

pub fn render_periods(table: &PeriodTable) -> String {
    let mut out = String::from(STDINT_INCLUDE);
    out.push_str(&format!("#define N_PERIODS {}\n", table.entries.len()));
    out.push_str("const uint16_t periods[N_PERIODS] = {\n");
    for (i, entry) in table.entries.iter().enumerate() {
        out.push_str(&format!(
            "    [{}] = {}, // {:.6} Hz\n",
            i, entry.ticks, entry.frequency_hz
        ));
    }
    out.push_str("};\n");
    out
}

pub fn render(table: &Table) -> String {
    match table {
        Table::Sine(sine) => render_sine(sine),
        Table::Periods(periods) => render_periods(periods),
    }
}
