use faktur::core::*;

fn main() {
    // What a user might type into a DD/MM/YYYY filter field
    let inputs = ["15/06/2024", "5/1/2024", "31/02/2024", "2024-06-15", "", "Invalid Date"];

    for input in inputs {
        match parse_date(input) {
            Ok(transport) => println!(
                "{input:>14} → {transport} ({})",
                format_report_date(&transport)
            ),
            Err(e) => println!("{input:>14} → rejected: {e}"),
        }
    }

    // Dates coming back from the API
    for transport in ["2024-08-17", "2023-02-29"] {
        match transport_to_display(transport) {
            Ok(display) => println!("{transport} → {display}"),
            Err(e) => println!("{transport} → rejected: {e}"),
        }
    }
}
