// src/sheets/fallback.rs
//
// Built-in sample records, at least one per qualification family.
// Served whenever the live workbook can't produce a complete result so
// frontends always have something to show.

use crate::record::AssessmentRecord;

pub fn records() -> Vec<AssessmentRecord> {
    vec![
        AssessmentRecord {
            qualification: s!("RQF BTEC National"),
            sector: s!("Business"),
            component_code: s!("31619H"),
            component_name: s!("Unit 2: Developing a Marketing Campaign"),
            exam_type: s!("Task"),
            duration: s!("3 hours"),
            access: s!("Secure Dispatch"),
            level_of_control: s!("High"),
            additional_info: s!("Part A released two weeks before the supervised assessment period"),
            invigilator: s!("Internal"),
            qualification_sizes: s!("Certificate, Extended Certificate, Diploma, Extended Diploma"),
        },
        AssessmentRecord {
            qualification: s!("RQF BTEC National"),
            sector: s!("Health and Social Care"),
            component_code: s!("31491H"),
            component_name: s!("Unit 1: Human Lifespan Development"),
            exam_type: s!("Exam"),
            duration: s!("1 hour 30 minutes"),
            access: s!("Secure Dispatch"),
            level_of_control: s!("High"),
            additional_info: s!("Written examination, marked by Pearson"),
            invigilator: s!("External"),
            qualification_sizes: s!("Certificate, Extended Certificate, Diploma, Extended Diploma"),
        },
        AssessmentRecord {
            qualification: s!("RQF BTEC National"),
            sector: s!("Information Technology"),
            component_code: s!("31761H"),
            component_name: s!("Unit 2: Creating Systems to Manage Information"),
            exam_type: s!("Task"),
            duration: s!("5 hours supervised assessment"),
            access: s!("Secure Dispatch"),
            level_of_control: s!("High"),
            additional_info: s!("Computer-based task in a single session"),
            invigilator: s!("Internal"),
            qualification_sizes: s!("Extended Certificate, Diploma, Extended Diploma"),
        },
        AssessmentRecord {
            qualification: s!("NQF BTEC First"),
            sector: s!("Information and Creative Technology"),
            component_code: s!("20573E"),
            component_name: s!("Unit 1: The Online World"),
            exam_type: s!("Exam"),
            duration: s!("1 hour"),
            access: s!("Secure Dispatch"),
            level_of_control: s!("High"),
            additional_info: s!("Onscreen test, available on demand"),
            invigilator: s!("Internal"),
            qualification_sizes: s!(),
        },
        AssessmentRecord {
            qualification: s!("NQF BTEC First"),
            sector: s!("Sport"),
            component_code: s!("20586E"),
            component_name: s!("Unit 1: Fitness for Sport and Exercise"),
            exam_type: s!("Exam"),
            duration: s!("1 hour 15 minutes"),
            access: s!("Secure Dispatch"),
            level_of_control: s!("High"),
            additional_info: s!("Onscreen test, available on demand"),
            invigilator: s!("Internal"),
            qualification_sizes: s!(),
        },
        AssessmentRecord {
            qualification: s!("BTEC Technical"),
            sector: s!("Business Administration"),
            component_code: s!("21325K"),
            component_name: s!("Unit 3: Principles of Customer Service"),
            exam_type: s!("Task"),
            duration: s!("2 hours supervised assessment"),
            access: s!("Secure Dispatch"),
            level_of_control: s!("Medium"),
            additional_info: s!("Case-study based set task"),
            invigilator: s!("Internal"),
            qualification_sizes: s!(),
        },
        AssessmentRecord {
            qualification: s!("BTEC Tech Award 2022"),
            sector: s!("Enterprise"),
            component_code: s!("BEN03"),
            component_name: s!("Component 3: Marketing and Finance for Enterprise"),
            exam_type: s!("Exam"),
            duration: s!("2 hours"),
            access: s!("Secure Dispatch"),
            level_of_control: s!("High"),
            additional_info: s!("Written examination taken in the February or May series"),
            invigilator: s!("External"),
            qualification_sizes: s!(),
        },
        AssessmentRecord {
            qualification: s!("BTEC Tech Award 2022"),
            sector: s!("Health and Social Care"),
            component_code: s!("BHS03"),
            component_name: s!("Component 3: Health and Wellbeing"),
            exam_type: s!("Exam"),
            duration: s!("2 hours"),
            access: s!("Secure Dispatch"),
            level_of_control: s!("High"),
            additional_info: s!("Written examination taken in the February or May series"),
            invigilator: s!("External"),
            qualification_sizes: s!(),
        },
    ]
}
