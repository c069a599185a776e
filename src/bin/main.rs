use std::io::{self, BufRead};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use located_error::prelude::*;
use log::{error, warn};

use annotation::AnnotationIndex;
use classify::{assign_pair_type, classify_end, is_full_alignment, split_read_weight, EndClass};
use evidence::{count_pairs, EvidenceStore, Inter, Intra};
use fusion_io::{config, parse_line, Config, TableWriter};
use gfr::{build_entry, CandidateScores, GfrEntry};
use mc_scorer::{mean, score, SENTINEL};
use projector::{compute_envelope, convert_inter_coordinates, convert_intra_coordinates, inter_offset_ab, inter_offset_ba, intra_offset};

fn main() {
    let cli = parser::Cli::parse();
    logger::Logger::init(cli.verbose);

    if let Err(err) = run(&cli) {
        error!("{err:?}");
        process::exit(1);
    }
}

fn run(cli: &parser::Cli) -> Result<()> {
    cli.validate().loc("Invalid command line arguments")?;

    let config_path = Config::resolve_path(cli.config.clone()).loc("Failed to resolve configuration file")?;
    let config = Config::load(&config_path).loc("Failed to load configuration file")?;
    let annotation_dir = config.require(config::ANNOTATION_DIR, &config_path).loc("Missing configuration key")?;
    let model_filename = config
        .require(config::TRANSCRIPT_COMPOSITE_MODEL_FILENAME, &config_path)
        .loc("Missing configuration key")?;
    let annotation_path = std::path::Path::new(annotation_dir).join(model_filename);

    let annotation = AnnotationIndex::load(&annotation_path)
        .with_loc(|| format!("Failed to load annotation index from {}", annotation_path.display()))?;

    let seed = cli.seed.unwrap_or_else(|| SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos() as u64);
    let mut rng = fastrand::Rng::with_seed(seed);

    let mut store = EvidenceStore::new();
    let mut num_mrf_lines = 0u64;

    let stdin = io::stdin();
    for (line_no, raw_line) in stdin.lock().lines().enumerate() {
        let line_no = line_no + 1;
        let raw_line = raw_line.loc("Failed to read from standard input")?;
        if raw_line.trim().is_empty() {
            continue;
        }
        let mrf_entry = parse_line(&raw_line, line_no).loc("Malformed MRF record")?;
        num_mrf_lines += 1;
        ingest_entry(&annotation, &mut store, &mrf_entry)?;
    }

    let population = build_intra_offset_population(&annotation, &store);

    let num_intra = store.num_intras();
    let num_inter = store.num_inters();
    let num_super_intra = store.num_super_intras();

    let super_inters = store.build_super_inters();
    let num_super_inter = super_inters.len();

    let mut writer = TableWriter::new(None::<&str>).loc("Failed to open GFR output")?;
    writer.write_header(&GfrEntry::header())?;

    let mut num_gfr_entries = 0usize;
    for sinter in &super_inters {
        if sinter.num_inters() < f64::from(cli.min_paired_end_reads) {
            break;
        }

        let t1 = annotation.get(sinter.transcript1);
        let t2 = annotation.get(sinter.transcript2);
        let num_intra1 = store.super_intra(sinter.transcript1).map_or(0.0, |si| si.num_intras());
        let num_intra2 = store.super_intra(sinter.transcript2).map_or(0.0, |si| si.num_intras());

        let counts = count_pairs(&sinter.inters);
        let scores = match compute_envelope(sinter, &counts) {
            None => CandidateScores { mean_ab: SENTINEL, mean_ba: SENTINEL, p_ab: SENTINEL, p_ba: SENTINEL },
            Some(envelope) => {
                let map_ab = convert_inter_coordinates(t1, t2, &envelope, &counts, true);
                let map_ba = convert_inter_coordinates(t1, t2, &envelope, &counts, false);

                let candidates_ab: Vec<i64> = sinter
                    .inters
                    .iter()
                    .filter_map(|i| inter_offset_ab(&map_ab, &t1.chromosome, &t2.chromosome, i))
                    .collect();
                let candidates_ba: Vec<i64> = sinter
                    .inters
                    .iter()
                    .filter_map(|i| inter_offset_ba(&map_ba, &t1.chromosome, &t2.chromosome, i))
                    .collect();

                CandidateScores {
                    mean_ab: mean(&candidates_ab),
                    mean_ba: mean(&candidates_ba),
                    p_ab: score(&mut rng, &population, &candidates_ab),
                    p_ba: score(&mut rng, &population, &candidates_ba),
                }
            }
        };

        num_gfr_entries += 1;
        let entry = build_entry(&cli.prefix, num_gfr_entries, sinter, t1, t2, num_intra1, num_intra2, scores);
        writer.write_row(&entry)?;
    }
    writer.flush()?;

    let sidecar_path = std::path::PathBuf::from(format!("{}.intraOffsets.gz", cli.prefix));
    fusion_io::write_intra_offsets(&sidecar_path, &population)
        .with_loc(|| format!("Failed to write sidecar file {}", sidecar_path.display()))?;

    warn!("fusion-detect_numMrfLines: {num_mrf_lines}");
    warn!("fusion-detect_numIntra: {num_intra}");
    warn!("fusion-detect_numInter: {num_inter}");
    warn!("fusion-detect_numSuperIntra: {num_super_intra}");
    warn!("fusion-detect_numSuperInter: {num_super_inter}");
    warn!("fusion-detect_numGfrEntries: {num_gfr_entries}");

    Ok(())
}

/// Classify and group every block pair of one MRF entry into `Intra`/`Inter` evidence.
/// Ambiguous overlaps (neither end resolving to exactly one transcript) are silently
/// dropped (§4.2, S5); classification failures on a resolved pair are fatal (§4.9).
fn ingest_entry(annotation: &AnnotationIndex, store: &mut EvidenceStore, entry: &fusion_io::MrfEntry) -> Result<()> {
    for block1 in &entry.read1.blocks {
        for block2 in &entry.read2.blocks {
            let hits1 = annotation.overlapping(&block1.target_name, block1.target_start, block1.target_end);
            let hits2 = annotation.overlapping(&block2.target_name, block2.target_start, block2.target_end);
            if hits1.len() != 1 || hits2.len() != 1 {
                continue;
            }
            let (id1, id2) = (hits1[0], hits2[0]);
            let t1 = annotation.get(id1);
            let t2 = annotation.get(id2);

            let end1 = classify_end(t1, block1.target_start, block1.target_end)
                .with_loc(|| format!("Failed to classify end 1 against transcript {}", t1.name))?;
            let end2 = classify_end(t2, block2.target_start, block2.target_end)
                .with_loc(|| format!("Failed to classify end 2 against transcript {}", t2.name))?;

            let full1 = is_full_alignment(block1.target_start, block1.target_end, entry.read1.sequence.len());
            let full2 = is_full_alignment(block2.target_start, block2.target_end, entry.read2.sequence.len());
            let weight = split_read_weight(full1, full2);

            if id1 == id2 {
                if matches!(end1, EndClass::Exon(_)) && matches!(end2, EndClass::Exon(_)) {
                    store.add_intra(Intra {
                        transcript: id1,
                        read_start1: block1.target_start,
                        read_end1: block1.target_end,
                        read_start2: block2.target_start,
                        read_end2: block2.target_end,
                        weight,
                    });
                }
                continue;
            }

            let (pair_type, number1, number2) = assign_pair_type(end1, end2);
            let inter = Inter {
                transcript1: id1,
                transcript2: id2,
                read_start1: block1.target_start,
                read_end1: block1.target_end,
                read_start2: block2.target_start,
                read_end2: block2.target_end,
                sequence1: entry.read1.sequence.clone(),
                sequence2: entry.read2.sequence.clone(),
                pair_type,
                number1,
                number2,
                weight,
            };
            inter.validate().loc("Evidence integrity check failed on inter-transcript pair")?;
            store.add_inter(inter);
        }
    }
    Ok(())
}

/// Pool intra-offsets across every transcript that accumulated `Intra` evidence (§4.6, §4.7).
fn build_intra_offset_population(annotation: &AnnotationIndex, store: &EvidenceStore) -> Vec<i64> {
    let mut population = Vec::new();
    for super_intra in store.super_intras() {
        let transcript = annotation.get(super_intra.transcript);
        let map = convert_intra_coordinates(transcript);
        for intra in &super_intra.intras {
            if let Some(offset) = intra_offset(&map, &transcript.chromosome, intra) {
                population.push(offset);
            }
        }
    }
    population
}
