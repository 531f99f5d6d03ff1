//! Simulated speech-to-text and voice guidance.
//!
//! The transcription and confidence are derived from the upload size alone, so
//! the same recording always yields the same result.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::responder::{random_page, reference_suffix};

pub const SAMPLE_TRANSCRIPTIONS: [&str; 10] = [
    "Check the pressure readings on the main valve",
    "The motor is making unusual noise during startup",
    "Replace the filter element and reset the system",
    "What's the proper torque specification for this bolt",
    "System shows error code E-204, need troubleshooting steps",
    "How do I perform the monthly maintenance checklist",
    "The equipment is overheating, need immediate assistance",
    "Where can I find the wiring diagram for this component",
    "I need help with the hydraulic pump troubleshooting",
    "The conveyor belt is slipping and needs adjustment",
];

pub const SOURCES: [&str; 4] = [
    "Equipment Technical Manual - Section 4.2",
    "Safety Procedures Handbook - Chapter 7",
    "Maintenance Best Practices Guide",
    "Manufacturer Service Bulletin #2024-15",
];

pub const PROCESSING_TIME_SECS: f64 = 2.3;

/// Rough bytes per second of recorded audio
const BYTES_PER_SECOND: u64 = 16_000;

const PRESSURE_GUIDANCE: &str = "Based on your pressure-related inquiry, here's a comprehensive diagnostic approach:

**1. Initial Assessment**
- Document current pressure readings and compare to specifications
- Check system status indicators and pressure gauges
- Verify operational parameters are within normal ranges

**2. Systematic Diagnosis**
- Inspect pressure relief valves and check valve settings
- Test pressure sensors and instrumentation accuracy
- Examine pump performance and flow characteristics

**3. Safety Considerations**
- Follow lockout/tagout procedures before any pressure system work
- Use proper PPE including safety glasses and protective clothing
- Ensure system is properly depressurized before maintenance

**4. Resolution Strategy**
- Calibrate pressure instruments if readings are inconsistent
- Replace faulty pressure relief valves or regulators as needed
- Document all findings and corrective actions taken

📋 **Reference Documentation:**
[Pressure Systems Manual](/pdfs/manual.pdf#page={page}) - Chapter 5: Pressure Diagnostics and Safety";

const MOTOR_GUIDANCE: &str = "For motor-related noise and startup issues, follow this diagnostic protocol:

**1. Immediate Safety Check**
- Ensure motor is properly grounded and electrical connections are secure
- Verify lockout/tagout procedures are followed
- Check for any obvious signs of overheating or damage

**2. Acoustic Analysis**
- Document the type of noise (grinding, squealing, knocking, etc.)
- Note when noise occurs (startup, steady state, shutdown)
- Use vibration analysis tools if available

**3. Electrical Diagnostics**
- Check motor current draw and compare to nameplate values
- Verify voltage balance across all phases
- Test insulation resistance and winding continuity

**4. Mechanical Inspection**
- Examine bearing condition and lubrication
- Check coupling alignment and belt tension
- Inspect motor mount and foundation integrity

📋 **Reference Documentation:**
[Motor Diagnostics Guide](/pdfs/manual.pdf#page={page}) - Section 6.3: Motor Troubleshooting Procedures";

const FILTER_GUIDANCE: &str = "Filter replacement and system reset procedure:

**1. Pre-Replacement Steps**
- Identify correct filter type and part number
- Gather required tools and safety equipment
- Review system operating parameters before shutdown

**2. Safe Shutdown Procedure**
- Follow proper equipment shutdown sequence
- Allow system to reach safe operating conditions
- Implement lockout/tagout procedures

**3. Filter Replacement**
- Document old filter condition with photos
- Install new filter with proper orientation
- Ensure all seals and gaskets are properly seated

**4. System Reset and Startup**
- Remove all lockout/tagout devices
- Follow proper startup sequence
- Monitor system parameters during initial operation
- Document completion and any observations

📋 **Reference Documentation:**
[Filter Maintenance Manual](/pdfs/manual.pdf#page={page}) - Chapter 9: Filter Replacement Procedures";

const GENERAL_GUIDANCE: &str = "Technical Analysis for: \"{text}\"

**1. Safety First**
- Follow all applicable safety procedures and standards
- Use proper personal protective equipment (PPE)
- Ensure proper lockout/tagout procedures are implemented

**2. Diagnostic Approach**
- Document current system conditions and symptoms
- Review equipment documentation and service history
- Follow systematic troubleshooting procedures

**3. Technical Considerations**
- Check all safety interlocks and protective devices
- Verify proper operation of monitoring systems
- Test system performance against specifications

**4. Implementation**
- Follow manufacturer's recommended procedures
- Use proper tools and calibrated instruments
- Document all work performed and findings

**5. Verification**
- Conduct proper testing after completion
- Verify system operates within normal parameters
- Update maintenance records and documentation";

const CLOSING: &str =
    "This guidance is based on industry best practices and equipment manufacturer recommendations.";

/// What the uploaded recording looked like
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub mime_type: String,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceFileInfo {
    pub filename: String,
    pub size_bytes: u64,
    pub mimetype: String,
    pub processed_at: DateTime<Utc>,
    pub duration_estimate: u64,
}

#[derive(Debug, Clone)]
pub struct VoiceAnalysis {
    pub transcription: &'static str,
    pub response: String,
    pub confidence: f64,
    pub sources: Vec<String>,
    pub processing_time: f64,
    pub file_info: VoiceFileInfo,
}

pub fn transcribe(size: usize) -> &'static str {
    SAMPLE_TRANSCRIPTIONS[size % SAMPLE_TRANSCRIPTIONS.len()]
}

/// Between 0.89 and 0.98
pub fn confidence(size: usize) -> f64 {
    0.89 + (size % 10) as f64 / 100.0
}

/// Guidance template for a transcription, routed on keywords
pub fn guidance_template(transcription: &str) -> &'static str {
    let lower = transcription.to_lowercase();
    if lower.contains("pressure") {
        PRESSURE_GUIDANCE
    } else if lower.contains("motor") || lower.contains("noise") {
        MOTOR_GUIDANCE
    } else if lower.contains("filter") || lower.contains("replace") {
        FILTER_GUIDANCE
    } else {
        GENERAL_GUIDANCE
    }
}

pub fn analyze<R: Rng + ?Sized>(
    rng: &mut R,
    upload: &AudioUpload,
    ticket_id: Option<i32>,
) -> VoiceAnalysis {
    let transcription = transcribe(upload.size);

    let mut response = guidance_template(transcription)
        .replace("{page}", &random_page(rng).to_string())
        .replace("{text}", transcription);
    response.push_str(&reference_suffix(rng));
    response.push_str("\n\n");
    if let Some(id) = ticket_id {
        response.push_str(&format!("**For Ticket #{}**: ", id));
    }
    response.push_str(CLOSING);

    let size_bytes = upload.size as u64;

    VoiceAnalysis {
        transcription,
        response,
        confidence: confidence(upload.size),
        sources: SOURCES.iter().map(|s| s.to_string()).collect(),
        processing_time: PROCESSING_TIME_SECS,
        file_info: VoiceFileInfo {
            filename: upload.file_name.clone(),
            size_bytes,
            mimetype: upload.mime_type.clone(),
            processed_at: Utc::now(),
            duration_estimate: size_bytes / BYTES_PER_SECOND,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn upload(size: usize) -> AudioUpload {
        AudioUpload {
            file_name: "note.webm".to_string(),
            mime_type: "audio/webm".to_string(),
            size,
        }
    }

    #[test]
    fn test_transcription_depends_only_on_size() {
        assert_eq!(transcribe(0), SAMPLE_TRANSCRIPTIONS[0]);
        assert_eq!(transcribe(20), SAMPLE_TRANSCRIPTIONS[0]);
        assert_eq!(transcribe(13), SAMPLE_TRANSCRIPTIONS[3]);
        assert_eq!(transcribe(48_009), SAMPLE_TRANSCRIPTIONS[9]);
    }

    #[test]
    fn test_confidence_range() {
        assert!((confidence(10) - 0.89).abs() < 1e-9);
        assert!((confidence(19) - 0.98).abs() < 1e-9);
        assert!((confidence(5) - 0.94).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_routing() {
        assert_eq!(guidance_template(SAMPLE_TRANSCRIPTIONS[0]), PRESSURE_GUIDANCE);
        assert_eq!(guidance_template(SAMPLE_TRANSCRIPTIONS[1]), MOTOR_GUIDANCE);
        assert_eq!(guidance_template(SAMPLE_TRANSCRIPTIONS[2]), FILTER_GUIDANCE);
        assert_eq!(guidance_template(SAMPLE_TRANSCRIPTIONS[3]), GENERAL_GUIDANCE);
        assert_eq!(guidance_template("NOISE at idle"), MOTOR_GUIDANCE);
    }

    #[test]
    fn test_pressure_recording_for_ticket() {
        let mut rng = StdRng::seed_from_u64(11);
        let analysis = analyze(&mut rng, &upload(32_000), Some(5));

        assert_eq!(analysis.transcription, "Check the pressure readings on the main valve");
        assert!(analysis
            .response
            .starts_with("Based on your pressure-related inquiry"));
        assert!(analysis.response.ends_with(
            "**For Ticket #5**: This guidance is based on industry best practices and equipment manufacturer recommendations."
        ));
        assert!((analysis.confidence - 0.89).abs() < 1e-9);
        assert_eq!(analysis.sources.len(), 4);
        assert_eq!(analysis.processing_time, 2.3);
        assert_eq!(analysis.file_info.size_bytes, 32_000);
        assert_eq!(analysis.file_info.duration_estimate, 2);
        assert_eq!(analysis.file_info.mimetype, "audio/webm");
    }

    #[test]
    fn test_general_guidance_quotes_transcription() {
        let mut rng = StdRng::seed_from_u64(2);
        let analysis = analyze(&mut rng, &upload(3), None);
        assert!(analysis
            .response
            .starts_with("Technical Analysis for: \"What's the proper torque specification for this bolt\""));
        assert!(!analysis.response.contains("**For Ticket #"));
        assert!(analysis.response.ends_with(CLOSING));
    }

    #[test]
    fn test_same_size_same_transcription_and_confidence() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let first = analyze(&mut a, &upload(1234), None);
        let second = analyze(&mut b, &upload(1234), None);
        assert_eq!(first.transcription, second.transcription);
        assert_eq!(first.confidence, second.confidence);
    }
}
