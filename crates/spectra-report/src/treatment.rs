//! Fixed treatment-information and disclaimer text embedded in every
//! report.

pub const TREATMENT_INFORMATION: &str = "\
TREATMENT OPTIONS AND RECOMMENDATIONS

There are several evidence-based treatments and interventions that can help \
individuals with autism spectrum disorder. Treatment plans are typically \
individualized based on specific needs and goals.

1. Applied Behavior Analysis (ABA)
Evidence-based therapy that focuses on improving specific behaviors and \
skills through structured learning. ABA can help with communication, social \
skills, and reducing challenging behaviors.

2. Educational Interventions
Specialized educational programs and accommodations to support learning and \
development. This includes individualized education plans (IEPs) and \
specialized teaching methods.

3. Speech and Language Therapy
Helps improve communication skills, including verbal and non-verbal \
communication. Can address speech delays, language comprehension, and social \
communication.

4. Occupational Therapy
Focuses on developing daily living skills, fine motor skills, and sensory \
processing abilities. Helps individuals become more independent in daily \
activities.

5. Social Skills Training
Structured programs to help develop social interaction skills, understanding \
social cues, and building relationships with peers and family members.

6. Sensory Integration Therapy
Addresses sensory processing difficulties that are common in autism. Helps \
individuals better process and respond to sensory information.

7. Family Support and Training
Provides families with strategies and support to better understand and help \
their loved ones with autism. Includes parent training programs and family \
therapy.

8. Medications (when appropriate)
While there are no medications that treat the core symptoms of autism, some \
medications may help manage co-occurring conditions such as anxiety, \
depression, or attention difficulties.

IMPORTANT NOTES:
- Early intervention is crucial and can significantly improve outcomes
- Treatment should be individualized based on the person's specific needs and strengths
- A multidisciplinary approach often works best
- Regular monitoring and adjustment of treatment plans is important
- Family involvement and support is essential for success

NEXT STEPS:
1. Consult with a qualified healthcare professional for proper evaluation
2. Consider seeking a comprehensive developmental assessment
3. Research local autism support services and resources
4. Connect with autism support groups and organizations
5. Develop a comprehensive treatment plan with professional guidance";

pub const MEDICAL_DISCLAIMER: &str = "\
This screening tool is for informational purposes only and is not intended \
as a medical diagnosis. Please consult with qualified healthcare \
professionals for proper evaluation and diagnosis. A formal diagnosis of \
autism spectrum disorder requires comprehensive evaluation by qualified \
healthcare professionals.";
