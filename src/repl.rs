//! Interactive prompt for the CLI frontend.
//!
//! A line-oriented loop over stdin/stdout: each accepted command edits the
//! active calculator and re-renders it, the way a form re-renders after
//! every keystroke. Rejected edits print the error and leave all state
//! untouched.

use std::io::{BufRead, Write};

use crate::calculators::{ComponentKind, Topology};
use crate::error::{ElectraCalcError, Result};
use crate::presets::{led_preset, wire_material, AWG_SIZES, LED_PRESETS};
use crate::solver::Field;
use crate::suite::{CalculatorKind, Suite};

/// Run the prompt loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(suite: &mut Suite, input: R, mut output: W) -> Result<()> {
    writeln!(output, "ElectraCalc — enter 'help' for commands")?;
    writeln!(output, "{}", render(suite))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => {}
            "quit" | "exit" => break,
            _ => match execute(suite, line) {
                Ok(text) => writeln!(output, "{text}")?,
                Err(err) => writeln!(output, "error: {err}")?,
            },
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}

/// Execute one command line and return the text to print.
fn execute(suite: &mut Suite, line: &str) -> Result<String> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "help" => Ok(help(suite.active())),
        "show" => Ok(render(suite)),
        "use" => {
            suite.select(CalculatorKind::from_name(rest)?);
            Ok(render(suite))
        }
        "reset" => {
            reset_active(suite);
            Ok(render(suite))
        }
        _ => {
            apply_edit(suite, command, rest)?;
            Ok(render(suite))
        }
    }
}

/// Restore the active calculator to its initial state.
fn reset_active(suite: &mut Suite) {
    match suite.active() {
        CalculatorKind::Led => suite.led = Default::default(),
        CalculatorKind::Ohm => suite.ohm.reset(),
        CalculatorKind::Combinations => suite.combinations = Default::default(),
        CalculatorKind::Battery => suite.battery = Default::default(),
        CalculatorKind::VoltageDrop => suite.voltage_drop = Default::default(),
    }
}

/// Apply a field edit to the active calculator.
fn apply_edit(suite: &mut Suite, command: &str, rest: &str) -> Result<()> {
    match suite.active() {
        CalculatorKind::Ohm => {
            let field = Field::from_name(command)
                .map_err(|_| ElectraCalcError::unknown_command(command))?;
            suite.ohm.set_field(field, rest)
        }
        CalculatorKind::Led => match command {
            "vs" => suite.led.set_source_voltage(rest),
            "vf" => suite.led.set_forward_voltage(rest),
            "if" => suite.led.set_forward_current(rest),
            "preset" => {
                let preset = led_preset(rest).ok_or_else(|| ElectraCalcError::UnknownPreset {
                    name: rest.to_string(),
                })?;
                suite.led.apply_preset(preset);
                Ok(())
            }
            _ => Err(ElectraCalcError::unknown_command(command)),
        },
        CalculatorKind::Combinations => match command {
            "kind" => {
                suite.combinations.kind = match rest.to_ascii_lowercase().as_str() {
                    "resistor" | "resistors" => ComponentKind::Resistor,
                    "capacitor" | "capacitors" => ComponentKind::Capacitor,
                    _ => return Err(ElectraCalcError::unknown_command(rest)),
                };
                Ok(())
            }
            "topology" => {
                suite.combinations.topology = match rest.to_ascii_lowercase().as_str() {
                    "series" => Topology::Series,
                    "parallel" => Topology::Parallel,
                    _ => return Err(ElectraCalcError::unknown_command(rest)),
                };
                Ok(())
            }
            "add" => {
                suite.combinations.add_entry();
                Ok(())
            }
            "remove" => {
                let index = parse_index(rest, suite.combinations.entries().len())?;
                suite.combinations.remove_entry(index)
            }
            "set" => {
                let mut args = rest.splitn(2, char::is_whitespace);
                let index =
                    parse_index(args.next().unwrap_or(""), suite.combinations.entries().len())?;
                let value = args.next().unwrap_or("").trim();
                suite.combinations.set_entry(index, value)
            }
            _ => Err(ElectraCalcError::unknown_command(command)),
        },
        CalculatorKind::Battery => match command {
            "capacity" => suite.battery.set_capacity(rest),
            "draw" => suite.battery.set_draw(rest),
            "safety" => {
                match rest.to_ascii_lowercase().as_str() {
                    "on" => suite.battery.set_safety_factor(true),
                    "off" => suite.battery.set_safety_factor(false),
                    "" => suite.battery.toggle_safety_factor(),
                    _ => return Err(ElectraCalcError::unknown_command(rest)),
                }
                Ok(())
            }
            _ => Err(ElectraCalcError::unknown_command(command)),
        },
        CalculatorKind::VoltageDrop => match command {
            "v" => suite.voltage_drop.set_supply_voltage(rest),
            "i" => suite.voltage_drop.set_load_current(rest),
            "length" => suite.voltage_drop.set_length(rest),
            "area" => suite.voltage_drop.set_area(rest),
            "material" => {
                let material =
                    wire_material(rest).ok_or_else(|| ElectraCalcError::UnknownMaterial {
                        name: rest.to_string(),
                    })?;
                suite.voltage_drop.set_material(material);
                Ok(())
            }
            "awg" => {
                let gauge: u32 = rest
                    .parse()
                    .map_err(|_| ElectraCalcError::invalid_number("awg", rest))?;
                suite.voltage_drop.apply_awg(gauge)
            }
            _ => Err(ElectraCalcError::unknown_command(command)),
        },
    }
}

/// Parse a 1-based entry index as shown in the rendered list (R1, C2, ...).
fn parse_index(raw: &str, len: usize) -> Result<usize> {
    let shown: usize = raw
        .parse()
        .map_err(|_| ElectraCalcError::invalid_number("component index", raw))?;
    shown
        .checked_sub(1)
        .ok_or(ElectraCalcError::ComponentIndexOutOfRange { index: 0, len })
}

fn value_or_dash(text: Option<String>) -> String {
    text.unwrap_or_else(|| "—".to_string())
}

/// Render the active calculator as a small text form.
fn render(suite: &Suite) -> String {
    let mut out = format!("[{}]\n", suite.active().label());
    match suite.active() {
        CalculatorKind::Ohm => {
            for field in Field::ALL {
                let marker = if suite.ohm.recently_edited(field) {
                    "*"
                } else {
                    " "
                };
                out.push_str(&format!(
                    "{marker} {:<11} {:>10} {}\n",
                    field.name(),
                    value_or_dash(suite.ohm.display(field)),
                    field.unit()
                ));
            }
            out.push_str("enter any two values to calculate the remaining two");
        }
        CalculatorKind::Led => {
            let led = &suite.led;
            out.push_str(&format!(
                "  vs (source)  {:>10} V\n",
                value_or_dash(led.source_voltage.map(|v| format!("{v}")))
            ));
            out.push_str(&format!(
                "  vf (forward) {:>10} V\n",
                value_or_dash(led.forward_voltage.map(|v| format!("{v}")))
            ));
            out.push_str(&format!(
                "  if (current) {:>10} mA\n",
                value_or_dash(led.forward_current_ma.map(|v| format!("{v}")))
            ));
            let presets: Vec<&str> = LED_PRESETS.iter().map(|p| p.name).collect();
            out.push_str(&format!("  presets: {}\n", presets.join(", ")));
            out.push_str(&format!(
                "required resistance: {} Ω",
                value_or_dash(led.display_resistance())
            ));
        }
        CalculatorKind::Combinations => {
            let combo = &suite.combinations;
            out.push_str(&format!(
                "  {:?} in {:?}\n",
                combo.kind, combo.topology
            ));
            for (i, entry) in combo.entries().iter().enumerate() {
                out.push_str(&format!(
                    "  {}{} = {} {}\n",
                    combo.kind.prefix(),
                    i + 1,
                    value_or_dash(entry.map(|v| format!("{v}"))),
                    combo.kind.unit()
                ));
            }
            out.push_str(&format!(
                "total combined value: {} {}",
                value_or_dash(combo.display_combined()),
                combo.kind.unit()
            ));
        }
        CalculatorKind::Battery => {
            let battery = &suite.battery;
            out.push_str(&format!(
                "  capacity     {:>10} mAh\n",
                value_or_dash(battery.capacity_mah.map(|v| format!("{v}")))
            ));
            out.push_str(&format!(
                "  draw         {:>10} mA\n",
                value_or_dash(battery.draw_ma.map(|v| format!("{v}")))
            ));
            out.push_str(&format!(
                "  safety factor ({}x): {}\n",
                crate::calculators::BatteryRuntime::SAFETY_FACTOR,
                if battery.safety_factor { "on" } else { "off" }
            ));
            out.push_str(&format!(
                "estimated runtime: {} hours",
                value_or_dash(battery.display_hours())
            ));
            if let (Some(days), Some(weeks)) = (battery.runtime_days(), battery.runtime_weeks()) {
                out.push_str(&format!(" ({days:.1} days, {weeks:.1} weeks)"));
            }
        }
        CalculatorKind::VoltageDrop => {
            let drop = &suite.voltage_drop;
            out.push_str(&format!(
                "  v (supply)   {:>10} V\n",
                value_or_dash(drop.supply_voltage.map(|v| format!("{v}")))
            ));
            out.push_str(&format!(
                "  i (load)     {:>10} A\n",
                value_or_dash(drop.load_current.map(|v| format!("{v}")))
            ));
            out.push_str(&format!(
                "  length       {:>10} m\n",
                value_or_dash(drop.length_m.map(|v| format!("{v}")))
            ));
            out.push_str(&format!(
                "  area         {:>10} mm²\n",
                value_or_dash(drop.area_mm2.map(|v| format!("{v}")))
            ));
            out.push_str(&format!("  resistivity  {:>10} Ω·mm²/m\n", drop.resistivity));
            out.push_str(&format!(
                "voltage loss: {} V",
                value_or_dash(drop.display_drop())
            ));
            if let Some(efficiency) = drop.efficiency_percent() {
                out.push_str(&format!(" (efficiency {efficiency:.1}%)"));
            }
        }
    }
    out
}

/// Command summary for the active calculator.
fn help(active: CalculatorKind) -> String {
    let mut out = String::from(
        "commands: use <led|ohm|combinations|battery|drop>, show, reset, help, quit\n",
    );
    match active {
        CalculatorKind::Ohm => {
            out.push_str("ohm: v|i|r|p <value>  (no value clears the field)");
        }
        CalculatorKind::Led => {
            out.push_str("led: vs <V>, vf <V>, if <mA>, preset <name>");
        }
        CalculatorKind::Combinations => {
            out.push_str(
                "combinations: kind resistor|capacitor, topology series|parallel,\n  add, remove <n>, set <n> <value>",
            );
        }
        CalculatorKind::Battery => {
            out.push_str("battery: capacity <mAh>, draw <mA>, safety [on|off]");
        }
        CalculatorKind::VoltageDrop => {
            let gauges: Vec<String> = AWG_SIZES.iter().map(|(g, _)| g.to_string()).collect();
            out.push_str(&format!(
                "drop: v <V>, i <A>, length <m>, area <mm²>, material <name>, awg <{}>",
                gauges.join("|")
            ));
        }
    }
    out
}
