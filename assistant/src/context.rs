//! Static reference text injected into prompts.
//!
//! One block per answerable intent. Greeting has no block of its own and is
//! answered with [`PROFILE_CONTEXT`].

/// System instruction placed at the top of every prompt.
pub const SYSTEM_PROMPT: &str = r#"
You are the AI assistant embedded in a personal portfolio website.
You answer questions about the portfolio owner's background, skills, projects and system designs.
Use ONLY the facts in "Relevant Context". If the context does not cover the question, say so briefly.
Never invent employers, dates, metrics or links. Keep a friendly, professional tone.
"#;

pub const PROFILE_CONTEXT: &str = r#"
Profile:
- Backend and GenAI engineer focused on shipping LLM-powered products end to end.
- Builds APIs, retrieval pipelines and agent workflows, and deploys them on AWS.
- Comfortable owning a feature from prototype notebook to monitored production service.
- Interested in practical AI: grounded answers, predictable latency, low operating cost.
"#;

pub const SKILLS_CONTEXT: &str = r#"
Skills:
- Languages: Python (primary), SQL, shell scripting.
- Web/API: FastAPI, REST design, async request handling, streaming responses.
- GenAI: LangChain, LangGraph, prompt design, retrieval-augmented generation, local models via Ollama.
- Cloud: AWS (VPC, EC2, Lambda, S3, IAM, API Gateway), infrastructure as code.
- Practices: containerization, CI/CD, logging and monitoring, cost-aware architecture.
"#;

pub const PROJECTS_CONTEXT: &str = r#"
Projects:
- VPC Architecture: a production-style AWS network with public/private subnets across availability zones,
  NAT gateways, bastion access and least-privilege security groups.
- SmartDocX: a document intelligence assistant that ingests PDFs, chunks and indexes them,
  and answers questions with cited passages.
- Nova: a conversational agent built with LangGraph that routes requests between tools
  and keeps answers grounded in supplied data.
- Portfolio AI Assistant: this chatbot; keyword-routed context, a local model served by Ollama,
  streamed generation and an in-memory answer cache.
"#;

pub const VPC_ARCHITECTURE_CONTEXT: &str = r#"
VPC Architecture (design and request flow):
- One VPC split into public and private subnets in two availability zones.
- Internet Gateway attached to the VPC; public route table sends 0.0.0.0/0 to it.
- Application Load Balancer in the public subnets terminates client traffic.
- Application instances live in private subnets and are reached only through the load balancer.
- NAT Gateways in the public subnets give private instances outbound internet access.
- Bastion host in a public subnet is the only SSH entry point; security groups allow SSH from it alone.
- Security groups are least-privilege: ALB accepts 80/443, app tier accepts traffic only from the ALB.
- Flow: client → Internet Gateway → ALB → private app instance → NAT Gateway for outbound calls.
"#;
