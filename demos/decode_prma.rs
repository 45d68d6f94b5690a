use prma_parser::{DecodeError, PRMA, decode_sentence};

fn print(line: &str, result: Result<PRMA, DecodeError>) {
    match result {
        Ok(prma) => println!("{line:<45} => {prma:?}"),
        Err(e) => println!("{line:<45} => error: {e}"),
    }
}

fn main() {
    env_logger::init();

    let lines = [
        "PRMA,1,12:34:56.78,UA,Engine room fire,Alarm",
        "PRMA,2,Heartbeat OK",
        "PRMA,3,123456.78,AA,SFI123_ISA456,Alarm",
        "PRMA,4,1,0,1,1",
        "PRMA,9,x",
        "PRMA,1",
        "GPGGA,123456.00,4916.29,N",
    ];

    for line in lines {
        // stands in for the NMEA tokenizer: framing and checksum are already gone
        let mut fields = line.split(',');
        let sentence_type = fields.next().unwrap_or_default();
        let fields: Vec<&str> = fields.collect();

        print(line, decode_sentence(sentence_type, &fields));
    }
}
