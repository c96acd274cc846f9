use thikana::AddressExtractor;

// Excerpt of a municipal agreement document with two embedded office
// addresses among legal boilerplate.
const SAMPLE_TEXT: &str = "\
A G R E E M E N T
This Agreement is made and entered into at Mumbai, and effective on this
__________ day of ____________ of Two Thousand Eighteen.
BETWEEN
The Municipal Corporation of Greater Mumbai a body corporate having
perpetual succession and a common seal constituted by the Mumbai Municipal
Corporation Act 1888, hereinafter referred to MCGM
REPRESENTED BY
Smt. Nidhi Choudhari, Deputy Municipal Commissioner (Special), having
office at 3rd Floor, Annexe Building, Municipal Head Office, Mahapalika Marg,
Mumbai- 400001, hereinafter referred to as DMC(Special)

Mr. J. J. Xavier
Advocate & Law Officer
Legal Department, MCGM
Room No. 311, 3rd Floor,
Annexe Building, Municipal
Head Office, Mahapalika Marg,
Mumbai:- 400 001
13
";

fn main() {
    env_logger::init();

    println!("Address Extraction Demo");
    println!("-----------------------");
    println!("\nInput document:\n{}", SAMPLE_TEXT);

    let extractor = AddressExtractor::new();
    let matches = extractor.extract_addresses(SAMPLE_TEXT);

    println!("\nEXTRACTION RESULT:");
    println!("  Addresses found: {}", matches.len());

    for (i, m) in matches.iter().enumerate() {
        println!("\nADDRESS {}:", i + 1);
        println!("  Formatted: {}", extractor.format_address(m));
        println!("  Region: {}", m.region);
        println!("  Confidence: {:.2}", m.confidence_score);
        for (name, value) in m.components.iter() {
            println!("  {}: {}", name, value);
        }
    }
}
